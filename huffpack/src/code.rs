//! Code table derivation from a Huffman tree.
//!
//! Walks the tree with an explicit stack (recursion depth is unbounded only
//! by pathological frequency skews, so the walk is iterative), appending a
//! `0` bit when descending left and a `1` bit when descending right. Each
//! leaf records its root-to-leaf path as the symbol's code. Codes are
//! prefix-free by construction: no symbol sits on the path to another.

use crate::error::{HuffpackError, Result};
use crate::tree::HuffmanTree;
use std::collections::HashMap;
use std::fmt;

/// Maximum supported code length in bits.
pub const MAX_CODE_BITS: u8 = 32;

/// A variable-length bit code, packed as value + length.
///
/// The first branch taken from the root is the most significant of the
/// `len` low bits of `bits`. Packing the path this way keeps table keys
/// `Copy` and cheap to hash; `Display` renders the "0"/"1" string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: u32,
    len: u8,
}

impl Code {
    /// Length of the code in bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Whether the code is empty (no bits accumulated yet).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extend this code by one bit.
    ///
    /// # Errors
    ///
    /// Returns [`HuffpackError::CodeOverflow`] past [`MAX_CODE_BITS`] bits.
    pub fn push(&self, bit: bool) -> Result<Code> {
        if self.len >= MAX_CODE_BITS {
            return Err(HuffpackError::CodeOverflow {
                length: self.len as u16 + 1,
                max: MAX_CODE_BITS,
            });
        }
        Ok(Code {
            bits: (self.bits << 1) | bit as u32,
            len: self.len + 1,
        })
    }

    /// Iterate the code's bits from first branch to last.
    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).rev().map(move |i| (self.bits >> i) & 1 == 1)
    }

    /// The packed bit value (first branch in the most significant position).
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter_bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The symbol-to-code table and its exact inverse, built in one tree walk.
///
/// A payload is only decodable against the code book that produced it; the
/// wire format does not embed the book.
#[derive(Debug, Clone, Default)]
pub struct CodeBook {
    /// Symbol -> code.
    codes: HashMap<u8, Code>,
    /// Code -> symbol.
    symbols: HashMap<Code, u8>,
    /// Longest code length, used to cut off hopeless decode candidates.
    max_len: u8,
}

impl CodeBook {
    /// Derive the code book for a tree.
    ///
    /// A lone-leaf root (single-symbol alphabet) gets the one-bit code `0`:
    /// an empty code could never be matched during decode.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut book = CodeBook::default();

        if let HuffmanTree::Leaf { symbol, .. } = tree {
            let code = Code::default().push(false)?;
            book.insert(*symbol, code);
            return Ok(book);
        }

        let mut stack: Vec<(&HuffmanTree, Code)> = vec![(tree, Code::default())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanTree::Leaf { symbol, .. } => book.insert(*symbol, path),
                HuffmanTree::Internal { left, right, .. } => {
                    stack.push((right, path.push(true)?));
                    stack.push((left, path.push(false)?));
                }
            }
        }
        Ok(book)
    }

    fn insert(&mut self, symbol: u8, code: Code) {
        self.max_len = self.max_len.max(code.len());
        self.codes.insert(symbol, code);
        self.symbols.insert(code, symbol);
    }

    /// Look up the code for a symbol.
    pub fn code(&self, symbol: u8) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    /// Look up the symbol for a complete code.
    pub fn symbol(&self, code: Code) -> Option<u8> {
        self.symbols.get(&code).copied()
    }

    /// Longest code length in the book.
    pub fn max_code_len(&self) -> u8 {
        self.max_len
    }

    /// Number of symbols in the book.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the book holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over (symbol, code) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes.iter().map(|(&s, &c)| (s, c))
    }
}
