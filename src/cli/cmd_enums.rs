use clap::{Parser, Subcommand};

/// Defines the command-line interface (CLI) for 'neu'.
/// `#[derive(Parser)]` automatically generates argument parsing code via `clap`.
#[derive(Parser)]
#[command(name = "neu")]
#[command(about = "Scaffold Neutralinojs apps and keep their binaries and client library up to date", long_about = None)]
pub struct Cli {
    /// Enables detailed debug output for troubleshooting and development.
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,

    /// Defines available subcommands for 'neu'.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Enumerates all supported subcommands with their specific arguments and options.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current version of the CLI and of the managed project.
    Version,
    /// Creates a new app from a template, then downloads the framework
    /// binaries and client library into it.
    Create {
        /// Name of the project directory to create.
        name: String,
        /// Template to scaffold from, as an `owner/repo` repository identifier.
        #[arg(long)]
        template: Option<String>,
        /// Optional HTTP proxy to route all downloads through.
        #[arg(long)]
        proxy: Option<String>,
    },
    /// Updates the framework binaries and client library of the project in
    /// the current directory.
    Update {
        /// Re-resolve the latest release versions instead of reusing the
        /// versions pinned in the project configuration.
        #[arg(long)]
        latest: bool,
        /// Optional HTTP proxy to route all downloads through.
        #[arg(long)]
        proxy: Option<String>,
    },
}
