use serde_json::json;

/// The message used when none is given on the command line: a small sensor document, serialized
/// compactly (no whitespace between tokens). It is also the default corpus for the huffman tree.
pub fn default_message() -> String {
    json!({
        "version": "2023-04-01",
        "data": [
            {
                "sensorId": "the quick brown fox jumps over the lazy dog",
                "value": "23.5297"
            },
            {
                "sensorId": "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
                "value": "23.5297"
            }
        ],
        "other": " !\"#$%&'()*+,-./0123456789:;<=>?@[\\]^_`{|}~"
    })
    .to_string()
}
