//! # huffpack
//!
//! A frequency-adaptive lossless Huffman codec: it turns an arbitrary byte
//! sequence into a compact bit-packed payload and reverses the
//! transformation exactly.
//!
//! ## Pipeline
//!
//! ```text
//! compress:   bytes -> frequency table -> priority queue -> Huffman tree
//!                   -> code book -> packed bits + padding header -> payload
//! decompress: payload -> strip padding header -> greedy prefix-code match
//!                     -> bytes
//! ```
//!
//! - [`freq`]: per-symbol occurrence counting
//! - [`tree`]: min-heap tree construction with a documented tie-break
//! - [`code`]: prefix-free code table and its inverse
//! - [`bitstream`]: MSB-first bit packing primitives
//! - [`codec`]: payload format and the [`HuffmanCodec`] facade
//! - [`error`]: error types
//!
//! ## Payload format
//!
//! One header byte holding the padding count (0-8), followed by the
//! concatenated per-symbol codes packed MSB-first and zero-padded to a byte
//! boundary. The code book is **not** embedded: a payload is only decodable
//! by the codec instance (or an identically trained one) that produced it.
//!
//! ## Example
//!
//! ```rust
//! use huffpack::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::new();
//! let payload = codec.compress(b"so much depends upon a red wheel barrow").unwrap();
//! let restored = codec.decompress(&payload).unwrap();
//! assert_eq!(restored, b"so much depends upon a red wheel barrow");
//! ```
//!
//! Everything runs synchronously in memory; there is no streaming API and
//! no internal concurrency. Codec instances share nothing, so distinct
//! instances may be used freely from distinct threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod tree;

pub use code::{Code, CodeBook};
pub use codec::HuffmanCodec;
pub use error::{HuffpackError, Result};
pub use freq::{FrequencyTable, count_frequencies};
pub use tree::HuffmanTree;
