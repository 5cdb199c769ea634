use crate::snippet::Snippet;
use crate::{archiver, importer, rewriter, uid};
use eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

const SOURCE_EXTENSION: &str = "csv";
const TARGET_EXTENSION: &str = "alfredsnippets";

/// Configuration required to run the conversion.
/// This decouples the logic from how the arguments were parsed.
pub struct ConvertConfig {
    pub csv_path: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
}

/// The main entry point for the conversion logic.
///
/// Validates the input path and the derived output path before touching
/// anything, then loads, converts, and packages the snippets. Conversion is
/// all-or-nothing: the first unsupported token aborts the run before a single
/// byte of output exists, and an already-present output file is never
/// overwritten.
pub fn execute(config: ConvertConfig) -> Result<()> {
    let output_path = derive_output_path(&config.csv_path)?;
    if output_path.exists() {
        return Err(eyre!("File {} already exists.", output_path.display()));
    }

    let rows = importer::read_rows(&config.csv_path)?;

    // Attach a uid to each row, then rewrite its body in place.
    let mut snippets: Vec<Snippet> = Vec::with_capacity(rows.len());
    for row in rows {
        let mut snippet = row.with_uid(uid::generate());
        snippet.snippet = rewriter::rewrite(&snippet.snippet)?;
        snippets.push(snippet);
    }

    let pb = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(snippets.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap()
            .progress_chars("=>-"),
        );
        bar.println(format!("Found {} snippet(s).", snippets.len()));
        bar
    };

    archiver::build_archive(&snippets, &output_path, &pb, config.verbose)?;
    pb.finish_and_clear();

    if !config.quiet {
        eprintln!(
            "Done. {} snippet(s) written to {}.",
            snippets.len(),
            output_path.display()
        );
    }

    Ok(())
}

/// Swap the recognized `.csv` extension for the Alfred collection extension.
fn derive_output_path(csv_path: &Path) -> Result<PathBuf> {
    match csv_path.extension() {
        Some(ext) if ext == SOURCE_EXTENSION => Ok(csv_path.with_extension(TARGET_EXTENSION)),
        _ => Err(eyre!(
            "File {} does not end with .{}",
            csv_path.display(),
            SOURCE_EXTENSION
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_the_extension() {
        assert_eq!(
            derive_output_path(Path::new("dir/snippets.csv")).unwrap(),
            PathBuf::from("dir/snippets.alfredsnippets")
        );
    }

    #[test]
    fn non_csv_extension_is_rejected() {
        assert!(derive_output_path(Path::new("snippets.txt")).is_err());
        assert!(derive_output_path(Path::new("snippets")).is_err());
        assert!(derive_output_path(Path::new("snippets.CSV")).is_err());
    }

    #[test]
    fn csv_appearing_mid_name_is_not_enough() {
        assert!(derive_output_path(Path::new("snippets.csv.bak")).is_err());
    }
}
