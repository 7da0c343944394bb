//! Huffman tree construction from a frequency table.
//!
//! Leaves are pushed into a min-heap ordered by frequency; the two
//! lowest-frequency nodes are repeatedly merged under a fresh internal node
//! until one root remains.
//!
//! # Determinism
//!
//! Two choices fix the exact bit patterns this codec emits:
//!
//! - **Tie-break**: heap entries order by `(frequency, sequence)`, where the
//!   sequence number is assigned at insertion. Leaves are inserted in
//!   ascending symbol order and merged nodes take the next number, so equal
//!   frequencies resolve to earliest-inserted-first.
//! - **Child order**: of the two popped nodes, the first becomes the left
//!   ("0") child and the second the right ("1") child.

use crate::error::{HuffpackError, Result};
use crate::freq::FrequencyTable;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A strict binary Huffman tree.
///
/// Every internal node has exactly two children. A single-symbol alphabet
/// degenerates to a lone leaf acting as root; the code generator handles
/// that case by assigning the sole symbol a one-bit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    /// Terminal node holding one symbol and its occurrence count.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: u8,
        /// Occurrence count of the symbol.
        freq: u64,
    },
    /// Merge node holding the summed frequency of its subtrees.
    Internal {
        /// Summed frequency of both children.
        freq: u64,
        /// The "0" branch.
        left: Box<HuffmanTree>,
        /// The "1" branch.
        right: Box<HuffmanTree>,
    },
}

/// Heap entry wrapping a subtree with its ordering keys.
///
/// `BinaryHeap` is a max-heap; entries are wrapped in `Reverse` at the
/// call site to pop lowest-frequency first.
#[derive(Debug)]
struct HeapEntry {
    freq: u64,
    seq: u64,
    node: HuffmanTree,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq
            .cmp(&other.freq)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl HuffmanTree {
    /// Frequency carried by this node (leaf count or subtree sum).
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanTree::Leaf { freq, .. } => *freq,
            HuffmanTree::Internal { freq, .. } => *freq,
        }
    }

    /// Number of leaves in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanTree::Leaf { .. } => 1,
            HuffmanTree::Internal { left, right, .. } => {
                left.leaf_count() + right.leaf_count()
            }
        }
    }

    /// Build a tree from a non-empty frequency table.
    ///
    /// # Errors
    ///
    /// Returns [`HuffpackError::EmptyInput`] for the empty table: no valid
    /// tree exists with zero leaves.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffpackError::EmptyInput);
        }

        // Sort by symbol so sequence numbers (and therefore tie-breaks) do
        // not depend on hash iteration order.
        let mut entries: Vec<(u8, u64)> = table.iter().map(|(&s, &f)| (s, f)).collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);

        let mut seq = 0u64;
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = entries
            .into_iter()
            .map(|(symbol, freq)| {
                let entry = HeapEntry {
                    freq,
                    seq,
                    node: HuffmanTree::Leaf { symbol, freq },
                };
                seq += 1;
                Reverse(entry)
            })
            .collect();

        while heap.len() > 1 {
            let Reverse(first) = heap.pop().expect("heap has more than one entry");
            let Reverse(second) = heap.pop().expect("heap has more than one entry");

            let freq = first.freq + second.freq;
            let merged = HuffmanTree::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            };
            heap.push(Reverse(HeapEntry {
                freq,
                seq,
                node: merged,
            }));
            seq += 1;
        }

        let Reverse(root) = heap.pop().expect("heap holds exactly the root");
        Ok(root.node)
    }
}
