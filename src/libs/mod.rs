// Core library modules behind the CLI commands.

// Project configuration store (`neutralino.config.json` read/update).
pub mod config;
// Release download and install workflow (binaries, client library, templates).
pub mod downloader;
// General-purpose helpers: HTTP fetch, zip extraction, path utilities.
pub mod utilities;
