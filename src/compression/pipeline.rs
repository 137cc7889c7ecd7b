use log::{debug, info};

use super::decode::huf_decode;
use super::encode::huf_encode;
use crate::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{build_code_table, CodeTable};
use crate::tools::cli::HuffOpts;
use crate::tools::default_message::default_message;
use crate::tools::freq_count::tokenize;
use crate::tools::report::Efficiency;

/// Everything produced by one encode and decode round trip.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The message as given (or the default message)
    pub message: String,
    /// Text the frequency table was counted from
    pub tree_text: String,
    /// Text that was encoded: the message, or its BWT
    pub transformed: String,
    /// BWT key when the transform was applied
    pub key: Option<usize>,
    pub codes: CodeTable,
    pub encoded: String,
    pub efficiency: Efficiency,
    pub decoded: String,
}

impl Outcome {
    pub fn round_trip_ok(&self) -> bool {
        self.decoded == self.message
    }
}

/// Run the whole pipeline for the options given: transform, count, build codes, encode, decode,
/// and undo the transform.
pub fn run(opts: &HuffOpts) -> Result<Outcome> {
    // An empty message means "use the default", the same as no message at all
    let message = opts
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(default_message);

    // Step 1: Optional BWT. The tree is then counted from the text actually being coded.
    let (transformed, key, tree_text) = if opts.bwt {
        let (bwt, key) = bwt_encode(&message)?;
        info!("Applied BWT, key is {}.", key);
        (bwt.clone(), Some(key), bwt)
    } else if opts.corpus {
        let mut corpus = default_message();
        corpus.push_str(&message);
        (message.clone(), None, corpus)
    } else {
        (message.clone(), None, message.clone())
    };

    // Step 2 & 3: Count symbols and build the code table. The corpus and the message are counted
    // apart so no word can match across the join and leave the message's first characters uncoded.
    let freqs = if key.is_none() && opts.corpus {
        let mut freqs = tokenize(&default_message(), &opts.words)?;
        freqs.merge(&tokenize(&message, &opts.words)?);
        freqs
    } else {
        tokenize(&tree_text, &opts.words)?
    };
    info!("Counted {} distinct symbols.", freqs.len());
    let codes = build_code_table(&freqs)?;

    // Step 4: Encode and measure
    let encoded = huf_encode(&transformed, &codes)?;
    let efficiency = Efficiency::measure(&message, &encoded);
    info!(
        "Encoded {} bits into {} bits.",
        efficiency.original_bits, efficiency.encoded_bits
    );

    // Step 5: Decode, then undo the BWT if one was applied
    let mut decoded = huf_decode(&encoded, &codes)?;
    if let Some(key) = key {
        decoded = unwind(&decoded, key, message.chars().count())?;
    }
    debug!("Decoded {} characters.", decoded.chars().count());

    Ok(Outcome {
        message,
        tree_text,
        transformed,
        key,
        codes,
        encoded,
        efficiency,
        decoded,
    })
}

/// Reverse the BWT, checking the block is the length that was transformed.
fn unwind(decoded: &str, key: usize, expected: usize) -> Result<String> {
    let found = decoded.chars().count();
    if found != expected {
        return Err(HuffError::InvalidInput(format!(
            "BWT block has {} characters, expected {}",
            found, expected
        )));
    }
    bwt_decode(decoded, key)
}
