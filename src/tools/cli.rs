use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Turn a count of -v flags into a verbosity level.
    pub fn from_count(count: u64) -> Self {
        match count {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Message to encode. None means use the built-in default message
    pub message: Option<String>,
    /// Words that get their own huffman codes
    pub words: Vec<String>,
    /// Apply the Burrows-Wheeler Transform before coding
    pub bwt: bool,
    /// Build the tree from the default message plus the message (ignored with bwt)
    pub corpus: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            message: None,
            words: vec![],
            bwt: false,
            corpus: true,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Optional BWT followed by huffman encoding and decoding of words and characters",
    long_about = "
    Encodes a message with huffman codes, where both single characters and whole words chosen
    on the command line become symbols. The message can first be permuted with the
    Burrows-Wheeler Transform. The encoded bits are then decoded again and the round trip
    is checked, along with the compression ratio."
)]
pub struct Args {
    /// The message to encode (defaults to a built-in JSON document)
    #[clap(short = 'm', long = "message")]
    message: Option<String>,

    /// Words to be represented by their own nodes in the huffman tree
    #[clap(short = 'w', long = "words", multiple_values = true)]
    words: Vec<String>,

    /// Apply the Burrows-Wheeler Transform before huffman encoding
    #[clap(long = "bwt")]
    bwt: bool,

    /// Build the tree from the message alone, without the default message as corpus
    #[clap(long = "no-corpus")]
    no_corpus: bool,

    /// Sets verbosity. -v shows progress, -vvv shows every symbol
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        Self {
            message: args.message,
            words: args.words,
            bwt: args.bwt,
            corpus: !args.no_corpus,
            verbose: if args.quiet {
                Verbosity::Quiet
            } else {
                Verbosity::from_count(u64::from(args.verbose))
            },
        }
    }
}

/// Parse the command line into HuffOpts and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    match &opts.message {
        Some(m) => info!("Encoding a message of {} characters", m.chars().count()),
        None => info!("Encoding the default message"),
    }
    if !opts.words.is_empty() {
        info!("Words: {:?}", opts.words)
    };
    if opts.bwt {
        info!("Applying the Burrows-Wheeler Transform")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> HuffOpts {
        HuffOpts::from(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn defaults_test() {
        assert_eq!(parse(&["wordhuff"]), HuffOpts::default());
    }

    #[test]
    fn full_args_test() {
        let opts = parse(&[
            "wordhuff",
            "-m",
            r#"{"deviceId":"01:23"}"#,
            "-w",
            "\"deviceId\"",
            ":",
            "--bwt",
            "-vv",
        ]);
        assert_eq!(opts.message.as_deref(), Some(r#"{"deviceId":"01:23"}"#));
        assert_eq!(opts.words, vec!["\"deviceId\"".to_string(), ":".to_string()]);
        assert!(opts.bwt);
        assert!(opts.corpus);
        assert_eq!(opts.verbose, Verbosity::Debug);
    }

    #[test]
    fn verbose_count_test() {
        assert_eq!(parse(&["wordhuff", "-v"]).verbose, Verbosity::Info);
        assert_eq!(parse(&["wordhuff", "-v", "-v", "-v"]).verbose, Verbosity::Trace);
        assert_eq!(parse(&["wordhuff", "-vvvvv"]).verbose, Verbosity::Trace);
    }

    #[test]
    fn quiet_test() {
        let opts = parse(&["wordhuff", "-vvv", "-q", "--no-corpus"]);
        assert_eq!(opts.verbose, Verbosity::Quiet);
        assert!(!opts.corpus);
        assert_eq!(opts.verbose.level_filter(), LevelFilter::Off);
    }
}
