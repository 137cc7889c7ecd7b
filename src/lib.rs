//! Huffman coding over words as well as characters, with an optional Burrows-Wheeler Transform.
//!
//! Version 0.1.0
//!
//! A message is (optionally) permuted with the BWT, split into symbols (caller-chosen words
//! first, longest first, then single characters), and each symbol is replaced by its huffman
//! code. The result is a string of '0' and '1' characters that decodes back to the message.
//!
//! Basic usage from the command line is as follows:
//!
//! `$> wordhuff -m '{"deviceId":"01:23:45:67:89:ab:cd:ef"}' -w '"deviceId"' --bwt`
//!
//! This encodes the message, decodes it again, and reports the compression ratio.
//!
//! The same steps are available as functions:
//!
//! ```
//! use wordhuff::{build_code_table, huf_decode, huf_encode, tokenize};
//!
//! let codes = build_code_table(&tokenize("cabab", &["ab"])?)?;
//! let bits = huf_encode("cabab", &codes)?;
//! assert_eq!(huf_decode(&bits, &codes)?, "cabab");
//! # Ok::<(), wordhuff::HuffError>(())
//! ```
//!
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
pub use compression::decode::huf_decode;
pub use compression::encode::huf_encode;
pub use compression::pipeline::{run, Outcome};
pub use error::{HuffError, Result};
pub use huffman_coding::code_table::{build_code_table, CodeTable};
pub use tools::freq_count::{tokenize, FreqTable};
