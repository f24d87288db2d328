// This file handles version reporting for the `neu` tool.
// It prints the CLI's own version and, when run inside a project directory,
// the framework versions pinned in the project configuration.

use crate::libs::config;
use crate::libs::utilities::path_helpers::get_version_tag;
use crate::{log_debug, log_info};
use colored::Colorize;
use std::env;

/// Main entry point for the `version` command.
pub fn run() {
    log_info!("neu CLI v{}", env!("CARGO_PKG_VERSION"));

    // Project-level versions are informational only; their absence just
    // means we are not inside an app directory.
    let Ok(root) = env::current_dir() else {
        return;
    };
    match config::load_from(&root) {
        Ok(config) => {
            log_info!(
                "Neutralinojs binaries: {}",
                display_version(config.cli.binary_version.as_deref())
            );
            log_info!(
                "Neutralinojs client: {}",
                display_version(config.cli.client_version.as_deref())
            );
        }
        Err(e) => {
            log_debug!("No readable project configuration in the current directory: {}", e);
        }
    }
}

/// Renders a pinned version, or a placeholder when nothing was downloaded yet.
fn display_version(version: Option<&str>) -> String {
    match version {
        Some(v) => get_version_tag(v).cyan().to_string(),
        None => "not downloaded yet".dimmed().to_string(),
    }
}
