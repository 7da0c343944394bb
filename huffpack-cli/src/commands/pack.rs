//! Pack command implementation.

use huffpack::HuffmanCodec;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Stats reported after packing, both human- and machine-readable.
#[derive(Serialize)]
struct PackStats {
    input: String,
    output: String,
    original_size: u64,
    compressed_size: u64,
    ratio_percent: f64,
    padding_bits: u8,
    distinct_symbols: usize,
}

pub fn cmd_pack(
    input: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let mut codec = HuffmanCodec::new();
    let payload = codec.compress(&data)?;

    let out_path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("hpk"),
    };
    fs::write(&out_path, &payload)?;

    let stats = PackStats {
        input: input.display().to_string(),
        output: out_path.display().to_string(),
        original_size: data.len() as u64,
        compressed_size: payload.len() as u64,
        ratio_percent: (1.0 - payload.len() as f64 / data.len() as f64) * 100.0,
        padding_bits: payload[0],
        distinct_symbols: codec.code_book().map_or(0, |b| b.len()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Packed {} -> {}", stats.input, stats.output);
        println!("  Original size: {} bytes", stats.original_size);
        println!("  Compressed size: {} bytes", stats.compressed_size);
        println!("  Space saved: {:.1}%", stats.ratio_percent);
        println!("  Distinct symbols: {}", stats.distinct_symbols);
        println!("  Padding bits: {}", stats.padding_bits);
        println!();
        println!("Note: the payload omits its code table; use `huffpack roundtrip`");
        println!("to decode, since decoding requires the codec that packed it.");
    }

    Ok(())
}
