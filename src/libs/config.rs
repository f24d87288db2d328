// This module reads and writes the project configuration file
// (`neutralino.config.json`) that lives at the project root. The file
// belongs to the application being developed; the CLI only owns the `cli`
// section, where previously resolved versions and the client-library path
// are kept, so everything else must round-trip unchanged.

use crate::constants::files::CONFIG_FILE;
use crate::log_debug;
use crate::schema::AppConfig;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

/// Loads the project configuration from the given project root.
///
/// A missing file is reported as `io::ErrorKind::NotFound` (the caller
/// decides whether that means "not a project directory"); a file that exists
/// but does not parse is a fatal error and propagates.
///
/// # Arguments
/// * `root`: The project root directory.
///
/// # Returns
/// * `io::Result<AppConfig>`: The parsed configuration, or an `io::Error`.
pub fn load_from(root: &Path) -> io::Result<AppConfig> {
    let path = root.join(CONFIG_FILE);
    log_debug!(
        "[Config] Reading project configuration: {}",
        path.display().to_string().cyan()
    );

    let contents = fs::read_to_string(&path)?;
    serde_json::from_str(&contents).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid {}: {}", CONFIG_FILE, e),
        )
    })
}

/// Writes the project configuration back to the given project root,
/// pretty-printed so the file stays hand-editable.
///
/// # Arguments
/// * `root`: The project root directory.
/// * `config`: The configuration to persist.
///
/// # Returns
/// * `io::Result<()>`: `Ok(())` once the file is written.
pub fn save_to(root: &Path, config: &AppConfig) -> io::Result<()> {
    let path = root.join(CONFIG_FILE);
    log_debug!(
        "[Config] Persisting project configuration: {}",
        path.display().to_string().cyan()
    );

    let json = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(&path, json)
}
