// Our custom logging macros to give us nicely formatted (and colored!) output
// for debugging, general information, and errors.
use crate::log_debug;
// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// For file system operations: removing directories, copying files.
use std::fs;
use std::io;
// For working with file paths in a robust, OS-agnostic way.
use std::path::{Path, PathBuf};

/// Normalizes a user-supplied project-relative path by stripping a leading
/// `./` or `/`. Configuration files often carry paths like
/// `./resources/js/neutralino.js`; the copy routines want them relative to
/// the working directory.
///
/// # Arguments
/// * `path`: A string slice representing the configured path.
///
/// # Returns
/// * `&str`: The same path without a leading `./` or `/`.
pub fn trim_path(path: &str) -> &str {
    path.strip_prefix("./")
        .or_else(|| path.strip_prefix('/'))
        .unwrap_or(path)
}

/// Maps a version token to its release-tag display form.
/// Published tags carry a `v` prefix (`v5.2.0`), while the nightly channel
/// is tagged literally as `nightly`.
///
/// # Arguments
/// * `version`: A bare version token, e.g. "5.2.0" or "nightly".
///
/// # Returns
/// * `String`: The tag form, e.g. "v5.2.0" or "nightly".
pub fn get_version_tag(version: &str) -> String {
    if version == crate::constants::NIGHTLY_VERSION {
        version.to_string()
    } else {
        format!("v{}", version)
    }
}

/// Derives the type-declaration sibling of a client script path by swapping
/// its final extension for `d.ts` (e.g. `resources/js/neutralino.js` →
/// `resources/js/neutralino.d.ts`).
pub fn types_sibling(path: &Path) -> PathBuf {
    let mut sibling = path.to_path_buf();
    sibling.set_extension("d.ts");
    sibling
}

/// Removes a scratch directory and everything in it. Idempotent: a path that
/// does not exist is already clear, not an error.
///
/// # Arguments
/// * `dir`: The directory to remove.
///
/// # Returns
/// * `io::Result<()>`: `Ok(())` once the directory is gone.
pub fn clear_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        log_debug!(
            "[Utils] Clearing directory: {}",
            dir.display().to_string().yellow()
        );
        fs::remove_dir_all(dir)?;
    }
    Ok(())
}

/// Recursively copies the contents of `src` into `dest`, overwriting files
/// that already exist. Used to lay a downloaded template scaffold over the
/// project root.
///
/// # Arguments
/// * `src`: The directory whose contents are copied.
/// * `dest`: The directory to copy into (created if absent).
///
/// # Returns
/// * `io::Result<()>`: `Ok(())` if every entry was copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    log_debug!(
        "[Utils] Copying {} into {}",
        src.display().to_string().blue(),
        dest.display().to_string().cyan()
    );
    fs::create_dir_all(dest)?;

    // Walk the source tree; `min_depth(1)` skips the root itself.
    for entry in walkdir::WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn trims_leading_path_markers() {
        assert_eq!(trim_path("./resources/js/app.js"), "resources/js/app.js");
        assert_eq!(trim_path("/resources/js/app.js"), "resources/js/app.js");
        assert_eq!(trim_path("resources/js/app.js"), "resources/js/app.js");
    }

    #[test]
    fn version_tag_prefixes_releases_but_not_nightly() {
        assert_eq!(get_version_tag("5.2.0"), "v5.2.0");
        assert_eq!(get_version_tag("nightly"), "nightly");
    }

    #[test]
    fn types_sibling_swaps_the_final_extension() {
        assert_eq!(
            types_sibling(Path::new("resources/js/neutralino.js")),
            PathBuf::from("resources/js/neutralino.d.ts")
        );
        assert_eq!(
            types_sibling(Path::new("resources/js/neutralino.mjs")),
            PathBuf::from("resources/js/neutralino.d.ts")
        );
    }

    #[test]
    fn clear_directory_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let scratch = tmp.path().join("scratch");

        fs::create_dir_all(scratch.join("nested")).unwrap();
        fs::write(scratch.join("nested/file.txt"), "x").unwrap();

        clear_directory(&scratch).unwrap();
        assert!(!scratch.exists());
        // Clearing an already-missing directory must also succeed.
        clear_directory(&scratch).unwrap();
    }

    #[test]
    fn recursive_copy_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");

        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("a.txt"), "new").unwrap();
        fs::write(src.join("sub/b.txt"), "nested").unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("a.txt"), "old").unwrap();

        copy_dir_recursive(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.join("sub/b.txt")).unwrap(), "nested");
    }
}
