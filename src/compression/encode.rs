use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::segmenter::Segmenter;

/// Encode `text` as a string of '0' and '1' characters using `codes`.
///
/// The text is split with the table's multi-character symbols, longest first, falling back to
/// single characters, exactly as the tokenizer split it. Every piece must have a code.
pub fn huf_encode(text: &str, codes: &CodeTable) -> Result<String> {
    let segmenter = Segmenter::new(
        codes
            .iter()
            .map(|(symbol, _)| symbol)
            .filter(|symbol| symbol.chars().nth(1).is_some()),
    );

    // Record (offset, code) for every symbol occurrence
    let mut segments: Vec<(usize, &str)> = Vec::new();
    for (offset, symbol) in segmenter.segments(text) {
        let code = codes.get(symbol).ok_or_else(|| {
            HuffError::InvalidInput(format!(
                "no code for {:?} at offset {}",
                symbol, offset
            ))
        })?;
        trace!("Found {:?} at position {} -> encoding as {}", symbol, offset, code);
        segments.push((offset, code));
    }

    // Segments come out in order already, but the output is defined by offset
    segments.sort_by_key(|&(offset, _)| offset);
    let encoded = segments.iter().map(|(_, code)| *code).collect::<String>();
    debug!(
        "Encoded {} symbols into {} bits.",
        segments.len(),
        encoded.len()
    );
    Ok(encoded)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::code_table::build_code_table;
    use crate::tools::freq_count::tokenize;

    #[test]
    fn aaab_test() {
        let codes: CodeTable = vec![("a", "0"), ("b", "1")].into_iter().collect();
        assert_eq!(huf_encode("aaab", &codes).unwrap(), "0001");
    }

    #[test]
    fn word_offsets_test() {
        let codes: CodeTable = vec![("c", "10"), ("ab", "0")].into_iter().collect();
        // c@0, ab@1, ab@3
        assert_eq!(huf_encode("cabab", &codes).unwrap(), "1000");
    }

    #[test]
    fn longest_first_test() {
        let codes: CodeTable = vec![("a", "00"), ("b", "01"), ("ab", "10"), ("abb", "11")]
            .into_iter()
            .collect();
        // abb@0, ab@3, a@5
        assert_eq!(huf_encode("abbaba", &codes).unwrap(), "111000");
    }

    #[test]
    fn overlapping_words_test() {
        // "bc" must not steal the 'b' that the tokenizer gave to "ab"
        let text = "xabcx bc";
        let freqs = tokenize(text, &["bc", "ab"]).unwrap();
        let codes = build_code_table(&freqs).unwrap();
        assert_eq!(freqs.get("a"), None);
        let bits = huf_encode(text, &codes).unwrap();
        let expected = ["x", "ab", "c", "x", " ", "bc"]
            .iter()
            .map(|s| codes.get(s).unwrap())
            .collect::<String>();
        assert_eq!(bits, expected);
    }

    #[test]
    fn missing_code_test() {
        let codes: CodeTable = vec![("a", "0"), ("b", "1")].into_iter().collect();
        assert_eq!(
            huf_encode("abc", &codes),
            Err(HuffError::InvalidInput(
                "no code for \"c\" at offset 2".to_string()
            ))
        );
    }

    #[test]
    fn empty_text_test() {
        let codes: CodeTable = vec![("a", "0")].into_iter().collect();
        assert_eq!(huf_encode("", &codes).unwrap(), "");
    }
}
