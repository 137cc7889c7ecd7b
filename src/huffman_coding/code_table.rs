//! Symbol to codeword tables, and the tree walk that produces them.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::{build_tree, Node, NodeData};
use crate::error::Result;
use crate::tools::freq_count::FreqTable;

/// Codewords ('0'/'1' strings) per symbol, in the order they were assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the codeword for a symbol, replacing any earlier one.
    pub fn insert(&mut self, symbol: &str, code: &str) {
        match self.index.get(symbol) {
            Some(&i) => self.codes[i].1 = code.to_string(),
            None => {
                self.index.insert(symbol.to_string(), self.codes.len());
                self.codes.push((symbol.to_string(), code.to_string()));
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.index.get(symbol).map(|&i| self.codes[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, codeword) pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.codes.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.codes.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// True when every codeword is non-empty and none is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut words = self.codes.iter().map(|(_, c)| c.as_str()).collect::<Vec<_>>();
        // Once sorted, a prefix always lands directly before a word that extends it
        words.sort_unstable();
        words.iter().all(|w| !w.is_empty()) && words.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = CodeTable::new();
        iter.into_iter().for_each(|(s, c)| table.insert(s, c));
        table
    }
}

/// Build the huffman tree for `freqs` and walk it into a fresh code table.
pub fn build_code_table(freqs: &FreqTable) -> Result<CodeTable> {
    let root = build_tree(freqs)?;
    let mut codes = CodeTable::new();
    let mut prefix = String::with_capacity(root.depth() + 1);
    return_leaves(&root, &mut prefix, &mut codes);

    debug!(
        "Code table has {} symbols, longest code is {} bits.",
        codes.len(),
        codes.max_len()
    );
    trace!("Codes: {:?}", codes.codes);
    Ok(codes)
}

/// Recursively walk the tree, adding a '0' for each left turn and a '1' for each right turn, and
/// record the path in `codes` at every leaf. A root that is a leaf gets the code "0".
fn return_leaves(node: &Node, prefix: &mut String, codes: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            prefix.push('0');
            return_leaves(left_child, prefix, codes);
            prefix.pop();
            prefix.push('1');
            return_leaves(right_child, prefix, codes);
            prefix.pop();
        }
        NodeData::Leaf(symbol) => {
            if prefix.is_empty() {
                codes.insert(symbol, "0");
            } else {
                codes.insert(symbol, prefix.as_str());
            }
        }
    };
}
