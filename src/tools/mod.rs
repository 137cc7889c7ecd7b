//! The tools module provides the helpers around the coding core of wordhuff.
//!
//! The tools are:
//! - cli: Command line interface.
//! - default_message: The built-in message and tree corpus.
//! - freq_count: Symbol tokenizing and frequency counting.
//! - report: Compression statistics and the printed summary of a run.
//! - segmenter: The longest-first word matcher shared by tokenizing and encoding.
//!
pub mod cli;
pub mod default_message;
pub mod freq_count;
pub mod report;
pub mod segmenter;
