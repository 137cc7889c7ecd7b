use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(String),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Creation order. Leaves take the frequency table order, merged nodes follow.
    pub seq: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    /// Distance from this node to its deepest leaf.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
            NodeData::Leaf(_) => 0,
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing sequence, so a max-heap pops the lightest
    /// (and among equals, the oldest) node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the huffman tree for a frequency table and return its root.
///
/// The two lightest nodes are merged until one is left. The lighter of the pair goes on the
/// right ('1') and the heavier on the left ('0'); equal weights are taken oldest first. A table
/// with one symbol gives a root that is itself a leaf.
pub fn build_tree(freqs: &FreqTable) -> Result<Node> {
    if freqs.is_empty() {
        return Err(HuffError::EmptyInput("no symbols to build a tree from"));
    }

    let mut heap = freqs
        .iter()
        .enumerate()
        .map(|(seq, (symbol, weight))| Node::new(weight, seq, NodeData::Leaf(symbol.to_string())))
        .collect::<BinaryHeap<Node>>();
    let mut next_seq = heap.len();

    // Pull off the two lightest nodes and hang them under a new parent
    while heap.len() > 1 {
        if let (Some(right_child), Some(left_child)) = (heap.pop(), heap.pop()) {
            heap.push(Node::new(
                left_child.weight + right_child.weight,
                next_seq,
                NodeData::Kids(Box::new(left_child), Box::new(right_child)),
            ));
            next_seq += 1;
        }
    }

    let root = heap
        .pop()
        .ok_or(HuffError::EmptyInput("no symbols to build a tree from"))?;
    debug!(
        "Built tree over {} symbols, weight {}, depth {}.",
        freqs.len(),
        root.weight,
        root.depth()
    );
    Ok(root)
}
