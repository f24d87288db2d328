// This file contains the logic for the `neu create` command.
// It scaffolds a new project directory from a template archive, then pulls
// the framework binaries and (if the template opts in) the client library
// into it, exactly as `neu update` would.

use crate::constants::DEFAULT_TEMPLATE;
use crate::libs::{config, downloader};
use crate::{log_debug, log_error, log_info};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

/// Main entry point for the `create` command.
///
/// # Arguments
/// * `name`: Name of the project directory to create. Must not already exist.
/// * `template`: Optional `owner/repo` template identifier; defaults to the
///   minimal official template.
/// * `proxy`: Optional HTTP proxy forwarded to every network request.
pub fn run(name: String, template: Option<String>, proxy: Option<String>) {
    log_debug!("Entered create::run() function.");

    let template = template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let root = PathBuf::from(&name);

    if root.exists() {
        log_error!(
            "A file or directory named {} already exists. Choose another project name.",
            name.bold()
        );
        exit(1);
    }

    if let Err(e) = fs::create_dir_all(&root) {
        log_error!("Unable to create the project directory {}: {}", name.bold(), e);
        exit(1);
    }

    log_info!(
        "Creating {} from the {} template...",
        name.bold(),
        template.cyan()
    );
    if let Err(e) = downloader::download_template(&root, &template, proxy.as_deref()) {
        log_error!("Failed to download the project template: {}", e);
        exit(1);
    }

    // The scaffold ships the project configuration; binaries and client
    // library are fetched against it, resolving fresh versions since a new
    // template pins none.
    let mut config = match config::load_from(&root) {
        Ok(config) => config,
        Err(e) => {
            log_error!(
                "The {} template did not provide a usable neutralino.config.json: {}",
                template.cyan(),
                e
            );
            exit(1);
        }
    };

    if let Err(e) =
        downloader::download_and_update_binaries(&root, &mut config, false, proxy.as_deref())
    {
        log_error!("Failed to download the Neutralinojs binaries: {}", e);
        exit(1);
    }

    if let Err(e) =
        downloader::download_and_update_client(&root, &mut config, false, proxy.as_deref())
    {
        log_error!("Failed to download the Neutralinojs client library: {}", e);
        exit(1);
    }

    log_info!("Your app is ready! Enter '{}' to get started.", format!("cd {}", name).cyan());
    log_debug!("Exited create::run() function.");
}
