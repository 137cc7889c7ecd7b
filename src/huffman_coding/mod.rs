//! The huffman_coding module turns a symbol frequency table into a table of prefix codes.
//!
//! Unlike a byte-oriented huffman coder, a symbol here may be a whole word. Each distinct symbol
//! becomes a leaf, leaves are merged two at a time (lightest first) until one root remains, and
//! the path from the root to each leaf is that symbol's code.
//!
//! The tree only lives long enough to walk it. Everything after that works from the CodeTable.
//!

pub mod code_table;
pub mod huffman;
