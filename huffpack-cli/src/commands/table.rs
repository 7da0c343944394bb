//! Table command implementation.
//!
//! Text-mode view of the code table a file's frequencies derive, shortest
//! codes (most frequent symbols) first.

use huffpack::{CodeBook, HuffmanTree, count_frequencies};
use std::fs;
use std::path::Path;

/// Render a symbol for display: printable ASCII as a char, otherwise hex.
fn symbol_label(symbol: u8) -> String {
    match symbol {
        b' ' => "' '".to_string(),
        0x21..=0x7E => format!("'{}'", symbol as char),
        _ => format!("0x{:02X}", symbol),
    }
}

pub fn cmd_table(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let frequencies = count_frequencies(&data);
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let book = CodeBook::from_tree(&tree)?;

    let mut rows: Vec<(u8, u64, String)> = book
        .iter()
        .map(|(symbol, code)| (symbol, frequencies[&symbol], code.to_string()))
        .collect();
    rows.sort_by(|a, b| (a.2.len(), a.0).cmp(&(b.2.len(), b.0)));

    println!("Code table for {}", input.display());
    println!("{} distinct symbols, {} bytes", book.len(), data.len());
    println!();
    println!("{:<8} {:>10}  {}", "symbol", "frequency", "code");
    for (symbol, freq, code) in rows {
        println!("{:<8} {:>10}  {}", symbol_label(symbol), freq, code);
    }

    Ok(())
}
