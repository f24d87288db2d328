// This module handles archive decompression. Everything the release
// infrastructure publishes (binaries, templates) ships as a zip file.

// Our custom logging macros to give us nicely formatted (and colored!) output
// for debugging, general information, and errors.
use crate::log_debug;
// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// For creating the extraction directory.
use std::fs;
// For opening the archive file.
use std::fs::File;
// `std::io` contains core input/output functionalities and error types.
use std::io;
// For working with file paths in a robust, OS-agnostic way.
use std::path::Path;
// For reading zip archives.
use zip::ZipArchive;

/// Extracts a downloaded zip archive into the given destination directory.
/// The destination is created if it does not exist; entries overwrite any
/// files already present.
///
/// # Arguments
/// * `src`: The path to the zip file.
/// * `dest`: The directory the archive contents are unpacked into.
///
/// # Returns
/// * `io::Result<()>`:
///   - `Ok(())` if every entry was extracted.
///   - An `io::Error` if the file cannot be opened, is not a valid zip
///     archive, or an entry cannot be written.
pub fn extract_zip(src: &Path, dest: &Path) -> io::Result<()> {
    log_debug!(
        "[Utils] Extracting archive {} into {}",
        src.to_string_lossy().blue(),
        dest.to_string_lossy().cyan()
    );

    fs::create_dir_all(dest)?;

    let file = File::open(src)?;
    let mut archive = ZipArchive::new(file).map_err(io::Error::other)?;
    archive.extract(dest).map_err(io::Error::other)?;

    log_debug!(
        "[Utils] Archive contents available at: {}",
        dest.to_string_lossy().green()
    );
    Ok(())
}

/// Builds a small zip fixture with the given entries. Shared by the archive
/// and downloader tests.
#[cfg(test)]
pub(crate) fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    use std::io::Write;

    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::FileOptions::default();
    for (name, contents) in entries {
        if let Some((dir, _)) = name.rsplit_once('/') {
            // ZipWriter does not require explicit directory entries, but
            // real archives usually carry them.
            let _ = writer.add_directory(dir.to_string(), options);
        }
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}
