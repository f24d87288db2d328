// Static tables shared by the downloader: remote URL templates, the
// per-platform binary manifest, and well-known local file names.

/// Remote endpoints. Each template carries a placeholder (`{repo}`, `{tag}`
/// or `{template}`) substituted by the URL builders in `libs::downloader`.
pub mod remote {
    /// Releases API endpoint, queried for the latest release tag of a repository.
    pub const RELEASES_API_URL: &str =
        "https://api.github.com/repos/neutralinojs/{repo}/releases/latest";

    /// Framework binaries archive for a given release tag.
    pub const BINARIES_URL: &str =
        "https://github.com/neutralinojs/neutralinojs/releases/download/{tag}/neutralinojs-{tag}.zip";

    /// Client library artifact prefix. The URL builder appends the script
    /// extension (`js`, `mjs`) or `d.ts` for the type declarations.
    pub const CLIENT_URL_PREFIX: &str =
        "https://github.com/neutralinojs/neutralino.js/releases/download/{tag}/neutralino.";

    /// Project template archive, `{template}` being an `owner/repo` identifier.
    pub const TEMPLATE_URL: &str = "https://github.com/{template}/archive/main.zip";
}

/// Expected file names inside downloaded archives and the local project tree.
pub mod files {
    /// Binary manifest: platform, then (architecture, expected filename).
    /// This is a superset of what any single release archive ships; entries
    /// absent from an archive are skipped during installation.
    pub const BINARIES: &[(&str, &[(&str, &str)])] = &[
        (
            "linux",
            &[
                ("x64", "neutralino-linux_x64"),
                ("arm64", "neutralino-linux_arm64"),
                ("armhf", "neutralino-linux_armhf"),
            ],
        ),
        (
            "darwin",
            &[
                ("x64", "neutralino-mac_x64"),
                ("arm64", "neutralino-mac_arm64"),
                ("universal", "neutralino-mac_universal"),
            ],
        ),
        ("win32", &[("x64", "neutralino-win_x64.exe")]),
    ];

    /// Shared dependency files distributed alongside the binaries.
    pub const DEPENDENCIES: &[&str] = &["WebView2Loader.dll"];

    /// Filename prefix of the client artifacts inside the temp workspace
    /// (e.g. `neutralino.js`, `neutralino.mjs`, `neutralino.d.ts`).
    pub const CLIENT_LIBRARY_PREFIX: &str = "neutralino.";

    /// Project configuration file, read and updated in the working directory.
    pub const CONFIG_FILE: &str = "neutralino.config.json";
}

/// Scratch directory for in-flight downloads and archive extraction.
/// A single well-known relative path, cleared at the end of each operation;
/// top-level commands are assumed to run sequentially.
pub const TEMP_DIR: &str = ".tmp";

/// Fallback release channel used when the live version lookup fails.
pub const NIGHTLY_VERSION: &str = "nightly";

/// User-Agent header sent with every outbound HTTP request.
pub const USER_AGENT: &str = "Neutralinojs CLI";

/// Default project template used by `neu create` when none is given.
pub const DEFAULT_TEMPLATE: &str = "neutralinojs/neutralinojs-minimal";
