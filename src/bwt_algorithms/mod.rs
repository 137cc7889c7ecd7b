//! The bwt_algorithms module holds the optional block transform used ahead of huffman coding.
//!
//! The Burrow-Wheeler Transform (BWT) permutes a message so that characters which precede similar
//! contexts end up next to each other. Runs of the same character become more likely, which in
//! turn skews the symbol frequencies that the huffman tree is built from.
//!
//! The transform works on characters, not bytes, so multi-byte UTF-8 text survives the round trip.
//!
pub mod bwt_sort;
