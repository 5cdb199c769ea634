use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use textexpander_to_alfred::converter::{self, ConvertConfig};

/// Convert a TextExpander CSV export to an Alfred .alfredsnippets collection.
/// The collection is written next to the input, which is never modified.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TextExpander CSV export (keyword, snippet, name columns).
    #[arg(value_name = "CSV_FILE")]
    csv_file: PathBuf,

    /// Print each snippet file as it is added to the collection.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress standard output (progress bar and summary).
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    converter::execute(ConvertConfig {
        csv_path: cli.csv_file,
        verbose: cli.verbose,
        quiet: cli.quiet,
    })
}
