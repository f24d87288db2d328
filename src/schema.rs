// src/schema.rs
// This file is the blueprint for the external data the CLI exchanges:
// the releases API response it reads, and the project configuration file
// it reads and writes back.

// 'Deserialize' turns external JSON into these Rust structures.
// 'Serialize' writes them back out (only the config file needs that).
use serde::{Deserialize, Serialize};
// The config file belongs to the application, not to this tool, so any keys
// we don't model are kept in raw JSON maps and written back untouched.
use serde_json::{Map, Value};

// Releases API response schema.

/// The subset of a release-metadata document the version resolver cares about.
/// `tag_name` is optional on purpose: a response that parses as JSON but
/// lacks the field must take the nightly fallback path, not produce an
/// undefined version.
#[derive(Debug, Deserialize)]
pub struct Release {
    /// The release tag, usually prefixed with `v` (e.g. "v5.2.0").
    pub tag_name: Option<String>,
}

// Project configuration schema (`neutralino.config.json`).

/// The whole configuration document. Only the `cli` section is typed; every
/// other top-level key is carried through the flattened map so a load/save
/// round-trip never drops application settings.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub cli: CliConfig,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `cli` section: versions pinned by previous downloads plus the
/// opt-in client library output path.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Framework binaries version written back after a fresh resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_version: Option<String>,

    /// Client library version written back after a fresh resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<String>,

    /// Where the client script should be installed, relative to the project
    /// root (e.g. "resources/js/neutralino.js"). When unset, client
    /// downloads are a no-op: the project manages the library itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_library: Option<String>,

    /// Unmodelled `cli.*` keys (binaryName, resourcesPath, ...) round-trip here.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
