//! Roundtrip command implementation.
//!
//! One codec instance serves both directions, which is the only way the
//! non-self-describing payload format can be decoded across a process
//! boundary: the code book never leaves the process.

use huffpack::HuffmanCodec;
use std::fs;
use std::path::{Path, PathBuf};

pub fn cmd_roundtrip(
    input: &Path,
    output: Option<&Path>,
    keep_payload: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let mut codec = HuffmanCodec::new();
    let payload = codec.compress(&data)?;
    let restored = codec.decompress(&payload)?;

    if restored != data {
        return Err("roundtrip mismatch: restored bytes differ from input".into());
    }

    if keep_payload {
        let payload_path = input.with_extension("hpk");
        fs::write(&payload_path, &payload)?;
        println!("Payload written to {}", payload_path.display());
    }

    let out_path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("restored"),
    };
    fs::write(&out_path, &restored)?;

    println!("Roundtrip OK: {} -> {}", input.display(), out_path.display());
    println!("  Original size: {} bytes", data.len());
    println!("  Compressed size: {} bytes", payload.len());
    println!(
        "  Space saved: {:.1}%",
        (1.0 - payload.len() as f64 / data.len() as f64) * 100.0
    );

    Ok(())
}
