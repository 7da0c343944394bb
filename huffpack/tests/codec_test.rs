//! End-to-end codec tests over the public API.

use huffpack::{HuffmanCodec, HuffpackError};

fn roundtrip(input: &[u8]) -> Vec<u8> {
    let mut codec = HuffmanCodec::new();
    let payload = codec.compress(input).expect("compression failed");
    codec.decompress(&payload).expect("decompression failed")
}

#[test]
fn test_roundtrip_text() {
    let original = b"it is a truth universally acknowledged, that a single man \
                     in possession of a good fortune, must be in want of a wife.";
    assert_eq!(roundtrip(original), original);
}

#[test]
fn test_roundtrip_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_roundtrip_repetitive() {
    let original = b"TOBEORNOTTOBEORTOBEORNOT".repeat(50);
    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_roundtrip_skewed_frequencies() {
    let mut original = vec![b'a'; 10_000];
    original.extend_from_slice(b"rare birds");
    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_roundtrip_binary_noise() {
    // Reproducible pseudo-random bytes.
    let mut seed: u64 = 0x123456789ABCDEF0;
    let original: Vec<u8> = (0..4096)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect();
    assert_eq!(roundtrip(&original), original);
}

#[test]
fn test_skewed_input_compresses() {
    let mut input = vec![b'a'; 10_000];
    input.extend_from_slice(b"bcd");

    let mut codec = HuffmanCodec::new();
    let payload = codec.compress(&input).unwrap();
    assert!(
        payload.len() < input.len() / 4,
        "heavily skewed input should compress well, got {} bytes",
        payload.len()
    );
}

#[test]
fn test_empty_input_is_an_error() {
    let mut codec = HuffmanCodec::new();
    assert!(matches!(
        codec.compress(b"").unwrap_err(),
        HuffpackError::EmptyInput
    ));
}

#[test]
fn test_single_symbol_roundtrip() {
    assert_eq!(roundtrip(b"aaaa"), b"aaaa");
    assert_eq!(roundtrip(b"z"), b"z");
}

#[test]
fn test_padding_invariant_across_lengths() {
    // Growing the input one symbol at a time walks the bit length through
    // every residue mod 8, including the full-extra-byte case.
    let text = b"abbcccddddeeeee repeated until long enough to cover all residues";
    for end in 1..text.len() {
        let input = &text[..end];
        let mut codec = HuffmanCodec::new();
        let payload = codec.compress(input).unwrap();

        let padding = payload[0];
        assert!((1..=8).contains(&padding), "padding {padding} out of range");

        let book = codec.code_book().unwrap();
        let bit_len: u64 = input
            .iter()
            .map(|&s| book.code(s).unwrap().len() as u64)
            .sum();
        assert_eq!(8 * (payload.len() as u64 - 1) - padding as u64, bit_len);

        assert_eq!(codec.decompress(&payload).unwrap(), input);
    }
}

#[test]
fn test_prefix_free_codes_across_inputs() {
    for input in [
        &b"ab"[..],
        b"abcdefgh",
        b"aaaaabbbbcccdde",
        b"the rain in spain stays mainly in the plain",
    ] {
        let mut codec = HuffmanCodec::new();
        codec.compress(input).unwrap();
        let book = codec.code_book().unwrap();

        let codes: Vec<String> = book.iter().map(|(_, c)| c.to_string()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                assert!(
                    i == j || !b.starts_with(a.as_str()),
                    "{a} is a prefix of {b}"
                );
            }
        }
    }
}

#[test]
fn test_fresh_codec_cannot_decode() {
    let mut sender = HuffmanCodec::new();
    let payload = sender.compress(b"xyz").unwrap();

    let fresh = HuffmanCodec::new();
    assert!(matches!(
        fresh.decompress(&payload).unwrap_err(),
        HuffpackError::NoCodeBook
    ));
}

#[test]
fn test_mismatched_book_documented_loss() {
    let mut sender = HuffmanCodec::new();
    let payload = sender.compress(b"xyz").unwrap();

    // A codec trained on other text decodes the bytes without failing, but
    // what comes out is drawn from *its* alphabet, not the sender's.
    let mut other = HuffmanCodec::new();
    other.compress(b"unrelated training corpus").unwrap();
    let garbled = other.decompress(&payload).unwrap();
    assert_ne!(garbled, b"xyz");
}

#[test]
fn test_payload_is_plain_bytes() {
    // A persisted-then-reloaded payload decodes identically: the bytes are
    // the whole contract, nothing hides in the codec besides the book.
    let mut codec = HuffmanCodec::new();
    let payload = codec.compress(b"write me to disk").unwrap();
    let reloaded: Vec<u8> = payload.clone();
    assert_eq!(
        codec.decompress(&reloaded).unwrap(),
        codec.decompress(&payload).unwrap()
    );
}
