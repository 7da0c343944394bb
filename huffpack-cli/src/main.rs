//! huffpack CLI - frequency-adaptive Huffman compression from the shell.
//!
//! The payload format does not embed its code table, so a payload written by
//! `pack` is only decodable inside the same process that produced it; the
//! `roundtrip` command performs that full cycle and verifies the result.

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_pack, cmd_roundtrip, cmd_table};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(
    author,
    version,
    about = "Frequency-adaptive Huffman codec - pack, roundtrip, and inspect"
)]
#[command(long_about = "
huffpack compresses a file with an input-adaptive Huffman code and packs the
result as a padding header plus MSB-first code bits.

The payload deliberately omits the code table, so decoding requires the codec
that produced it. `roundtrip` exercises the complete compress/decompress
cycle in one run and verifies the restored bytes.

Examples:
  huffpack pack notes.txt
  huffpack pack notes.txt -o notes.hpk --json
  huffpack roundtrip notes.txt -o notes.restored.txt
  huffpack table notes.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file and write the packed payload
    #[command(alias = "p")]
    Pack {
        /// File to compress
        input: PathBuf,

        /// Payload destination (default: input with .hpk extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output stats as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compress, decompress with the same codec, and verify the result
    #[command(alias = "r")]
    Roundtrip {
        /// File to cycle through the codec
        input: PathBuf,

        /// Destination for the restored bytes (default: input with .restored extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the intermediate payload next to the input
        #[arg(short, long)]
        keep_payload: bool,
    },

    /// Show the code table a file's frequencies derive
    #[command(alias = "t")]
    Table {
        /// File to analyze
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pack {
            input,
            output,
            json,
        } => cmd_pack(&input, output.as_deref(), json),
        Commands::Roundtrip {
            input,
            output,
            keep_payload,
        } => cmd_roundtrip(&input, output.as_deref(), keep_payload),
        Commands::Table { input } => cmd_table(&input),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "huffpack", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
