use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordhuff::{
    build_code_table, bwt_decode, bwt_encode, huf_decode, huf_encode, tokenize, CodeTable,
    HuffError,
};

const ALPHABET: &[char] = &['a', 'b', 'c', ' ', '"', ':', 'é', '0', '1'];

fn random_text(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn codes_for(text: &str, words: &[String]) -> CodeTable {
    build_code_table(&tokenize(text, words).unwrap()).unwrap()
}

#[test]
fn bwt_round_trip_test() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let len = rng.gen_range(1..60);
        let text = random_text(&mut rng, len);
        let (bwt, key) = bwt_encode(&text).unwrap();
        assert!(key < text.chars().count());
        assert_eq!(bwt_decode(&bwt, key).unwrap(), text);
    }
}

#[test]
fn huffman_round_trip_test() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let len = rng.gen_range(1..80);
        let text = random_text(&mut rng, len);
        let words = (0..rng.gen_range(0..4))
            .map(|_| {
                let word_len = rng.gen_range(2..5);
                random_text(&mut rng, word_len)
            })
            .collect::<Vec<String>>();
        let codes = codes_for(&text, &words);
        assert!(codes.is_prefix_free());
        let bits = huf_encode(&text, &codes).unwrap();
        assert!(bits.chars().all(|b| b == '0' || b == '1'));
        assert_eq!(huf_decode(&bits, &codes).unwrap(), text);
    }
}

#[test]
fn bwt_then_huffman_test() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let len = rng.gen_range(1..100);
        let text = random_text(&mut rng, len);
        let (bwt, key) = bwt_encode(&text).unwrap();
        let codes = codes_for(&bwt, &["aa".to_string(), "ab".to_string()]);
        let bits = huf_encode(&bwt, &codes).unwrap();
        let back = huf_decode(&bits, &codes).unwrap();
        assert_eq!(bwt_decode(&back, key).unwrap(), text);
    }
}

#[test]
fn cabab_test() {
    let freqs = tokenize("cabab", &["ab"]).unwrap();
    assert_eq!(freqs.get("c"), Some(1));
    assert_eq!(freqs.get("ab"), Some(2));
    assert_eq!(freqs.len(), 2);
    let codes = build_code_table(&freqs).unwrap();
    let c = codes.get("c").unwrap();
    let ab = codes.get("ab").unwrap();
    let bits = huf_encode("cabab", &codes).unwrap();
    assert_eq!(bits, format!("{}{}{}", c, ab, ab));
    assert_eq!(huf_decode(&bits, &codes).unwrap(), "cabab");
}

#[test]
fn aaab_test() {
    let codes = codes_for("aaab", &[]);
    assert_eq!(codes.get("a"), Some("0"));
    assert_eq!(codes.get("b"), Some("1"));
    assert_eq!(huf_encode("aaab", &codes).unwrap(), "0001");
    assert_eq!(huf_decode("0001", &codes).unwrap(), "aaab");
}

#[test]
fn single_symbol_test() {
    let codes = codes_for("~~~~~~", &[]);
    let bits = huf_encode("~~~~~~", &codes).unwrap();
    assert_eq!(bits, "000000");
    assert_eq!(huf_decode(&bits, &codes).unwrap(), "~~~~~~");
}

#[test]
fn truncated_stream_test() {
    let codes = codes_for("abcabcaab", &[]);
    let bits = huf_encode("abc", &codes).unwrap();
    let cut = &bits[..bits.len() - 1];
    assert!(matches!(
        huf_decode(cut, &codes),
        Err(HuffError::Decode { .. })
    ));
}
