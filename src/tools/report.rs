use std::fmt::{Display, Formatter};

use crate::compression::pipeline::Outcome;

/// Size comparison between a message stored at 8 bits per character and its encoded bitstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiency {
    pub original_bits: usize,
    pub encoded_bits: usize,
    pub ratio: f64,
    pub savings_pct: f64,
}

impl Efficiency {
    pub fn measure(original: &str, encoded: &str) -> Self {
        let original_bits = original.chars().count() * 8;
        let encoded_bits = encoded.len();
        let ratio = if encoded_bits == 0 {
            0.0
        } else {
            original_bits as f64 / encoded_bits as f64
        };
        let savings_pct = if original_bits == 0 {
            0.0
        } else {
            (1.0 - encoded_bits as f64 / original_bits as f64) * 100.0
        };
        Self {
            original_bits,
            encoded_bits,
            ratio,
            savings_pct,
        }
    }
}

impl Display for Efficiency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original Size (bits): {}", self.original_bits)?;
        writeln!(f, "Encoded Size (bits): {}", self.encoded_bits)?;
        writeln!(f, "Compression Ratio: {:.4}", self.ratio)?;
        write!(f, "Savings Percentage: {:.2}%", self.savings_pct)
    }
}

/// Render a finished run the way the command line shows it.
pub fn report(outcome: &Outcome) -> String {
    let mut lines = vec![
        format!("Message to build tree: {}", outcome.tree_text),
        format!("Transformed Message: {}", outcome.transformed),
    ];
    if let Some(key) = outcome.key {
        lines.push(format!("BWT Key: {}", key));
    }
    lines.push(format!("Encoded Message: {}", outcome.encoded));
    lines.push(format!("Huffman Codes ({}):", outcome.codes.len()));
    for (symbol, code) in outcome.codes.iter() {
        lines.push(format!("  {:?} -> {}", symbol, code));
    }
    lines.push(outcome.efficiency.to_string());
    lines.push(format!("Decoded Message: {}", outcome.decoded));
    lines.push(format!(
        "Round trip: {}",
        if outcome.round_trip_ok() { "ok" } else { "MISMATCH" }
    ));
    lines.join("\n")
}
