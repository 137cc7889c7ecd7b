use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::segmenter::Segmenter;
use crate::error::{HuffError, Result};

/// Occurrence counts per symbol, kept in the order each symbol was first seen.
///
/// First-seen order is what the tree builder uses to break ties between equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreqTable {
    symbols: Vec<(String, u64)>,
    index: FxHashMap<String, usize>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `symbol`. Empty symbols and zero counts are ignored.
    pub fn add(&mut self, symbol: &str, count: u64) {
        if symbol.is_empty() || count == 0 {
            return;
        }
        match self.index.get(symbol) {
            Some(&i) => self.symbols[i].1 += count,
            None => {
                self.index.insert(symbol.to_string(), self.symbols.len());
                self.symbols.push((symbol.to_string(), count));
            }
        }
    }

    /// Add every count from `other`, keeping this table's symbols first.
    pub fn merge(&mut self, other: &FreqTable) {
        other.iter().for_each(|(s, c)| self.add(s, c));
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.symbols[i].1)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.symbols.iter().map(|(s, c)| (s.as_str(), *c))
    }

    /// Number of characters the counted symbols add up to.
    pub fn total_chars(&self) -> u64 {
        self.iter()
            .map(|(s, c)| s.chars().count() as u64 * c)
            .sum()
    }
}

impl<'a> FromIterator<(&'a str, u64)> for FreqTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut table = FreqTable::new();
        iter.into_iter().for_each(|(s, c)| table.add(s, c));
        table
    }
}

/// Returns a frequency count of the symbols in `text`, matching `words` longest first and
/// falling back to single characters.
pub fn tokenize<S: AsRef<str>>(text: &str, words: &[S]) -> Result<FreqTable> {
    if text.is_empty() {
        return Err(HuffError::EmptyInput("no text to tokenize"));
    }
    let segmenter = Segmenter::new(words.iter().map(|w| w.as_ref()));
    let mut freqs = FreqTable::new();
    segmenter
        .segments(text)
        .for_each(|(_, symbol)| freqs.add(symbol, 1));

    debug!(
        "Tokenized {} characters into {} distinct symbols.",
        text.chars().count(),
        freqs.len()
    );
    trace!("Frequencies: {:?}", freqs.symbols);
    Ok(freqs)
}
