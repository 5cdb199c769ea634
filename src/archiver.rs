use crate::renderer;
use crate::snippet::Snippet;
use eyre::{Context, Result};
use indicatif::ProgressBar;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Package descriptor Alfred expects at the root of every snippet collection,
/// copied into each archive byte-for-byte.
const INFO_PLIST: &[u8] = include_bytes!("../templates/info.plist");

/// Stage every rendered snippet plus `info.plist` in a scratch directory, zip
/// the staged files, and move the archive to `output_path`.
///
/// The staging directory lives only inside this call: `TempDir` removes it on
/// every exit path, so a failure mid-way never leaks partial output. The zip
/// itself is built in a temp file next to the destination and only renamed
/// into place once complete.
pub fn build_archive(
    snippets: &[Snippet],
    output_path: &Path,
    pb: &ProgressBar,
    verbose: bool,
) -> Result<()> {
    let staging = tempfile::tempdir().wrap_err("Failed to create staging directory")?;

    for snippet in snippets {
        let filename = snippet.filename();
        fs::write(staging.path().join(&filename), renderer::render(snippet))
            .wrap_err_with(|| format!("Failed to stage snippet: {}", filename))?;
        if verbose {
            pb.println(format!("Added:    {}", filename));
        }
        pb.inc(1);
    }

    fs::write(staging.path().join("info.plist"), INFO_PLIST)
        .wrap_err("Failed to stage info.plist")?;

    write_zip(staging.path(), output_path)
}

/// Zip the staging directory's entries (sorted by name, so identical inputs
/// give identically laid out archives) and persist the result atomically.
fn write_zip(staging_dir: &Path, output_path: &Path) -> Result<()> {
    let parent = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)
        .wrap_err("Failed to create temporary archive file")?;

    let mut entries: Vec<_> = fs::read_dir(staging_dir)
        .wrap_err("Failed to list staging directory")?
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("Failed to list staging directory")?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut zip = ZipWriter::new(tmp.as_file_mut());
    let options = SimpleFileOptions::default();
    for entry in &entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let contents = fs::read(entry.path())
            .wrap_err_with(|| format!("Failed to read staged file: {}", name))?;
        zip.start_file(&*name, options)
            .wrap_err_with(|| format!("Failed to add archive entry: {}", name))?;
        zip.write_all(&contents)
            .wrap_err_with(|| format!("Failed to write archive entry: {}", name))?;
    }
    zip.finish().wrap_err("Failed to finalize archive")?;

    tmp.persist(output_path)
        .wrap_err_with(|| format!("Failed to move archive to {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressBar;
    use std::fs::File;

    fn snippet(name: &str, uid: &str) -> Snippet {
        Snippet {
            keyword: ";k".to_string(),
            snippet: "body".to_string(),
            name: name.to_string(),
            uid: uid.to_string(),
        }
    }

    #[test]
    fn archive_holds_one_entry_per_snippet_plus_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.alfredsnippets");
        let snippets = vec![snippet("A", "1111"), snippet("B", "2222")];

        build_archive(&snippets, &output, &ProgressBar::hidden(), false).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(archive.len(), 3);
        assert!(archive.by_name("A [1111].json").is_ok());
        assert!(archive.by_name("B [2222].json").is_ok());
        assert!(archive.by_name("info.plist").is_ok());
    }

    #[test]
    fn descriptor_is_copied_byte_for_byte() {
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.alfredsnippets");
        build_archive(&[], &output, &ProgressBar::hidden(), false).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        let mut contents = Vec::new();
        archive
            .by_name("info.plist")
            .unwrap()
            .read_to_end(&mut contents)
            .unwrap();
        assert_eq!(contents, INFO_PLIST);
    }

    #[test]
    fn same_name_snippets_get_distinct_entries() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.alfredsnippets");
        let snippets = vec![snippet("Dup", "AAAA"), snippet("Dup", "BBBB")];

        build_archive(&snippets, &output, &ProgressBar::hidden(), false).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert!(archive.by_name("Dup [AAAA].json").is_ok());
        assert!(archive.by_name("Dup [BBBB].json").is_ok());
    }
}
