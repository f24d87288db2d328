// This file contains the logic for the `neu update` command.
// It refreshes the framework binaries in `bin/` and, when the project opts
// in, the client library, reusing the versions pinned in the project
// configuration unless `--latest` forces a fresh resolution.

use crate::libs::{config, downloader};
use crate::{log_debug, log_error, log_info};
use colored::Colorize;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::exit;

/// Main entry point for the `update` command.
///
/// # Arguments
/// * `latest`: Ignore pinned versions and resolve the latest release tags.
/// * `proxy`: Optional HTTP proxy forwarded to every network request.
pub fn run(latest: bool, proxy: Option<String>) {
    log_debug!("Entered update::run() function.");

    let root = current_project_root();

    // The project configuration must exist: `update` runs inside an app
    // directory, unlike `create`.
    let mut config = match config::load_from(&root) {
        Ok(config) => config,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log_error!(
                "No {} found in the current directory. Run this command inside a Neutralinojs project, or create one with '{}'.",
                "neutralino.config.json".bold(),
                "neu create".cyan()
            );
            exit(1);
        }
        Err(e) => {
            log_error!("Unable to read the project configuration: {}", e);
            exit(1);
        }
    };

    if latest {
        log_info!(
            "'{}' flag is set, re-resolving the latest release versions",
            "--latest".bright_yellow()
        );
    }

    // The two downloads run strictly one after the other; they share the
    // same temp workspace.
    if let Err(e) =
        downloader::download_and_update_binaries(&root, &mut config, latest, proxy.as_deref())
    {
        log_error!("Failed to update the Neutralinojs binaries: {}", e);
        exit(1);
    }

    if let Err(e) =
        downloader::download_and_update_client(&root, &mut config, latest, proxy.as_deref())
    {
        log_error!("Failed to update the Neutralinojs client library: {}", e);
        exit(1);
    }

    log_info!("'neu update' command completed!!");
    log_debug!("Exited update::run() function.");
}

/// The project root for `update` is always the working directory.
fn current_project_root() -> PathBuf {
    match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log_error!("Unable to determine the current directory: {}", e);
            exit(1);
        }
    }
}
