//! Error types for huffpack operations.
//!
//! One lossy failure mode is deliberately *not* an error: decoding a payload
//! with an inverse table other than the one that produced it drops unmatched
//! trailing bits without signaling. That behavior is part of the wire
//! format's contract and is documented on
//! [`HuffmanCodec::decompress`](crate::HuffmanCodec::decompress).

use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffpackError {
    /// `compress` was called with an empty input.
    ///
    /// No frequency entries exist, so no tree can be built; the failure is
    /// reported here instead of surfacing as an empty priority-queue pop.
    #[error("Cannot compress empty input: no symbols to build a tree from")]
    EmptyInput,

    /// Payload is shorter than the one-byte padding header.
    #[error("Payload too short: missing padding header byte")]
    MissingHeader,

    /// The padding header is inconsistent with the payload.
    ///
    /// The codec only ever produces values 0-8, and the padding can never
    /// exceed the number of packed bits that follow the header.
    #[error("Invalid padding count {padding}: payload carries {content_bits} content bits")]
    InvalidPadding {
        /// The padding count read from the header byte.
        padding: u8,
        /// Number of bits following the header byte.
        content_bits: u64,
    },

    /// `decompress` was called on a codec that has never compressed.
    ///
    /// The payload format does not embed the code table, so a codec without
    /// one has nothing to decode against.
    #[error("No code table available: decompress requires a prior compress on this codec")]
    NoCodeBook,

    /// A derived code exceeds the packed code width.
    ///
    /// Reaching this depth requires a Fibonacci-like frequency skew over
    /// terabytes of input, so in practice it indicates corrupted frequency
    /// counts rather than real data.
    #[error("Huffman code length {length} exceeds the supported maximum of {max}")]
    CodeOverflow {
        /// The offending code length in bits.
        length: u16,
        /// Maximum representable code length.
        max: u8,
    },

    /// Ran out of bits while reading the packed stream.
    #[error("Unexpected end of bitstream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ended.
        position: u64,
    },
}

/// Result type alias for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffpackError>;
