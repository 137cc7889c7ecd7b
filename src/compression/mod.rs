//! The compression module drives the coding side of wordhuff.
//!
//! A run happens in the following steps:
//! - Burrow Wheeler Transform (optional): Permute the message so similar contexts cluster.
//! - Tokenize: Count symbols in the tree text, matching the user's words longest first.
//! - Huffman tree: Merge the lightest symbols until one tree remains, then read off the codes.
//! - Encode: Walk the message with the same longest-first rule and emit each symbol's code.
//!
//! Decoding is the inverse. Bits are collected until they spell a codeword, the symbol is emitted,
//! and if the message was transformed the BWT is reversed at the end.
//!

pub mod decode;
pub mod encode;
pub mod pipeline;
