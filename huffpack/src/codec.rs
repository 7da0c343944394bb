//! Compression/decompression pipeline and the codec facade.
//!
//! # Payload format
//!
//! | Offset | Size | Meaning |
//! |--------|------|---------|
//! | 0      | 1    | padding count, unsigned, produced values 0-8 |
//! | 1..    | var  | packed code bits, MSB-first, zero-padded to a byte boundary |
//!
//! The padding count is computed as `8 - (bit_len % 8)` *before* padding is
//! appended, so a bitstream already on a byte boundary gets a full extra
//! zero byte and a header of 8. Historical quirk of the format, kept for
//! compatibility.
//!
//! The code table is **not** embedded: a payload is only decodable by a
//! codec holding the code book that produced it. Embedding the table would
//! be a separately versioned format extension, not a change to this one.

use crate::bitstream::{MsbBitReader, MsbBitWriter};
use crate::code::{Code, CodeBook};
use crate::error::{HuffpackError, Result};
use crate::freq::count_frequencies;
use crate::tree::HuffmanTree;

/// Concatenate per-symbol codes, add the padding header, and pack to bytes.
fn pack(input: &[u8], book: &CodeBook) -> Result<Vec<u8>> {
    let bit_len: u64 = input
        .iter()
        .map(|&symbol| {
            book.code(symbol)
                .expect("BUG: symbol missing from a code book built over the same input")
                .len() as u64
        })
        .sum();

    // 8 when bit_len is already byte-aligned: a full extra padding byte.
    let padding = 8 - (bit_len % 8) as u8;

    let mut writer = MsbBitWriter::with_capacity(1 + ((bit_len + padding as u64) / 8) as usize);
    writer.write_bits(padding as u32, 8);
    for &symbol in input {
        let code = book
            .code(symbol)
            .expect("BUG: symbol missing from a code book built over the same input");
        writer.write_code(code);
    }
    writer.write_bits(0, padding);

    Ok(writer.into_vec())
}

/// Strip the padding header and greedily match codes against the book.
///
/// Bits left in an unmatched candidate when the stream ends are discarded
/// without error. With the originating book that tail is empty by
/// construction; with a foreign book this is the documented silent-loss
/// behavior of the non-self-describing format.
fn unpack(payload: &[u8], book: &CodeBook) -> Result<Vec<u8>> {
    let Some((&header, content)) = payload.split_first() else {
        return Err(HuffpackError::MissingHeader);
    };

    let total_bits = content.len() as u64 * 8;
    let padding = header;
    if padding > 8 || padding as u64 > total_bits {
        return Err(HuffpackError::InvalidPadding {
            padding,
            content_bits: total_bits,
        });
    }
    let content_bits = total_bits - padding as u64;

    let mut reader = MsbBitReader::new(content);
    let mut output = Vec::new();
    let mut candidate = Code::default();
    let max_len = book.max_code_len();

    while reader.bits_read() < content_bits {
        // A candidate at the book's longest length that still has no match
        // can never match; the rest of the stream is an unmatched tail.
        if !candidate.is_empty() && candidate.len() >= max_len {
            break;
        }

        candidate = candidate.push(reader.read_bit()?)?;
        if let Some(symbol) = book.symbol(candidate) {
            output.push(symbol);
            candidate = Code::default();
        }
    }

    Ok(output)
}

/// The Huffman codec facade.
///
/// `compress` runs frequency analysis, tree construction, code derivation,
/// and bit packing in sequence, keeping the resulting tree and code book on
/// the instance. `decompress` decodes against whatever the *last* compress
/// call produced, so the usual lifecycle is compress-then-decompress on one
/// instance.
///
/// # Example
///
/// ```
/// use huffpack::HuffmanCodec;
///
/// let mut codec = HuffmanCodec::new();
/// let payload = codec.compress(b"abracadabra").unwrap();
/// assert_eq!(codec.decompress(&payload).unwrap(), b"abracadabra");
/// ```
#[derive(Debug, Default)]
pub struct HuffmanCodec {
    tree: Option<HuffmanTree>,
    book: Option<CodeBook>,
}

impl HuffmanCodec {
    /// Create a codec with no code book yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress `input` into a self-padded payload.
    ///
    /// Rebuilds the frequency table, tree, and code book from scratch,
    /// replacing any book from a previous call.
    ///
    /// # Errors
    ///
    /// [`HuffpackError::EmptyInput`] if `input` is empty.
    pub fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let table = count_frequencies(input);
        let tree = HuffmanTree::from_frequencies(&table)?;
        let book = CodeBook::from_tree(&tree)?;

        let payload = pack(input, &book)?;

        self.tree = Some(tree);
        self.book = Some(book);
        Ok(payload)
    }

    /// Decompress a payload against this codec's current code book.
    ///
    /// # Errors
    ///
    /// - [`HuffpackError::NoCodeBook`] if this codec has never compressed.
    /// - [`HuffpackError::MissingHeader`] / [`HuffpackError::InvalidPadding`]
    ///   for malformed payloads.
    ///
    /// # Silent data loss with a foreign code book
    ///
    /// A payload produced by a *different* codec decodes against this
    /// instance's book without error: matching codes emit whatever symbols
    /// this book maps them to and any unmatched trailing bits are dropped.
    /// That lossy outcome is inherent to the non-self-describing payload
    /// format. Decode with the codec that produced the payload.
    pub fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let book = self.book.as_ref().ok_or(HuffpackError::NoCodeBook)?;
        unpack(payload, book)
    }

    /// The code book from the last `compress` call, if any.
    pub fn code_book(&self) -> Option<&CodeBook> {
        self.book.as_ref()
    }

    /// The Huffman tree from the last `compress` call, if any.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }
}
