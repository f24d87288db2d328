// This module is the download/install workflow behind `neu create` and
// `neu update`: it resolves release versions against the GitHub releases
// API, builds artifact URLs, fetches them into a temp workspace, and
// installs binaries, the client library, and project templates into the
// project tree.
//
// Every operation is strictly sequential: each step starts only after the
// previous one finished. The temp workspace is a single fixed path, so
// top-level operations must not run concurrently.

use crate::constants::files::{BINARIES, CLIENT_LIBRARY_PREFIX, DEPENDENCIES};
use crate::constants::remote::{BINARIES_URL, CLIENT_URL_PREFIX, RELEASES_API_URL, TEMPLATE_URL};
use crate::constants::{NIGHTLY_VERSION, TEMP_DIR};
use crate::libs::config;
use crate::libs::utilities::assets::{download_file, http_agent};
use crate::libs::utilities::compression::extract_zip;
use crate::libs::utilities::path_helpers::{
    clear_directory, copy_dir_recursive, get_version_tag, trim_path, types_sibling,
};
use crate::schema::{AppConfig, Release};
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// Version resolution

/// Queries the releases API for the latest release tag of a repository and
/// returns the bare version (leading `v` stripped).
///
/// This never fails outward: any bad status, transport error, unparsable
/// body, or a body without a `tag_name` resolves to the nightly channel so
/// the tooling stays usable without network access.
pub fn resolve_latest_version(repo: &str, proxy: Option<&str>) -> String {
    let url = RELEASES_API_URL.replace("{repo}", repo);
    resolve_from_url(&url, repo, proxy)
}

/// The resolution body, split from `resolve_latest_version` so the fallback
/// behavior can be exercised against an arbitrary endpoint.
fn resolve_from_url(url: &str, repo: &str, proxy: Option<&str>) -> String {
    fn fallback() -> String {
        log_warn!("Unable to fetch the latest version tag from GitHub. Using nightly releases...");
        NIGHTLY_VERSION.to_string()
    }

    log_debug!("[Downloader] Looking up latest release: {}", url.blue());

    let agent = match http_agent(proxy) {
        Ok(agent) => agent,
        Err(_) => return fallback(),
    };

    // `ureq` reports non-2xx statuses as `Err`, so a 404/500 from the API
    // lands in the same fallback arm as a transport failure.
    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(_) => return fallback(),
    };

    let release: Release = match response.into_json() {
        Ok(release) => release,
        Err(_) => return fallback(),
    };

    // A document without a `tag_name` string takes the fallback path too,
    // instead of producing an undefined version.
    match tag_to_version(release) {
        Some(version) => {
            log_info!(
                "Found the latest release tag {} for {}...",
                get_version_tag(&version).cyan(),
                repo.bold()
            );
            version
        }
        None => fallback(),
    }
}

/// Extracts the bare version from a release document, stripping the
/// conventional `v` tag prefix.
fn tag_to_version(release: Release) -> Option<String> {
    release
        .tag_name
        .map(|tag| tag.strip_prefix('v').unwrap_or(&tag).to_string())
}

/// Picks the version token to use for an artifact family: the stored one
/// when present and no forced refresh was requested, otherwise a fresh
/// resolution. The second element reports whether `resolve` ran, i.e.
/// whether the result must be persisted back to configuration.
fn select_version(
    stored: Option<&str>,
    latest: bool,
    resolve: impl FnOnce() -> String,
) -> (String, bool) {
    match stored {
        Some(version) if !latest => (version.to_string(), false),
        _ => (resolve(), true),
    }
}

// URL builders

/// Returns the binaries-archive URL for the configured (or freshly
/// resolved) version, persisting a fresh resolution into `cli.binaryVersion`.
fn binary_download_url(
    root: &Path,
    config: &mut AppConfig,
    latest: bool,
    proxy: Option<&str>,
) -> io::Result<String> {
    let (version, fresh) = select_version(config.cli.binary_version.as_deref(), latest, || {
        resolve_latest_version("neutralinojs", proxy)
    });

    if fresh {
        config.cli.binary_version = Some(version.clone());
        config::save_to(root, config)?;
    }

    Ok(render_binaries_url(&version))
}

/// Substitutes the version tag into the binaries URL template.
fn render_binaries_url(version: &str) -> String {
    BINARIES_URL.replace("{tag}", &get_version_tag(version))
}

/// Resolves the client-library version once per operation, persisting a
/// fresh resolution into `cli.clientVersion`. Both the script and the
/// type-declaration downloads reuse the returned token, so a single `update`
/// run performs at most one lookup for the client family.
fn resolve_client_version(
    root: &Path,
    config: &mut AppConfig,
    latest: bool,
    proxy: Option<&str>,
) -> io::Result<String> {
    let (version, fresh) = select_version(config.cli.client_version.as_deref(), latest, || {
        resolve_latest_version("neutralino.js", proxy)
    });

    if fresh {
        config.cli.client_version = Some(version.clone());
        config::save_to(root, config)?;
    }

    Ok(version)
}

/// Builds the download URL of a client artifact (`js`, `mjs` or `d.ts`).
fn client_download_url(version: &str, extension: &str) -> String {
    format!("{}{}", CLIENT_URL_PREFIX, extension).replace("{tag}", &get_version_tag(version))
}

/// Substitutes the template identifier into the template URL template.
fn template_download_url(template: &str) -> String {
    TEMPLATE_URL.replace("{template}", template)
}

/// The script extension of the client artifact. Driven by the configured
/// output path so the downloaded file and the fetched URL always agree: a
/// module-script path (`.mjs`) selects the `mjs` artifact, anything else the
/// plain `js` one.
fn script_extension(config: &AppConfig) -> &'static str {
    match &config.cli.client_library {
        Some(library) if library.contains(".mjs") => "mjs",
        _ => "js",
    }
}

/// The file name a client artifact is given inside the temp workspace.
fn client_artifact_name(extension: &str) -> String {
    format!("{}{}", CLIENT_LIBRARY_PREFIX, extension)
}

/// The repository name of an `owner/repo` template identifier. Archive
/// downloads of a repository's main branch extract into `<repo>-main`.
fn repo_name_from_template(template: &str) -> &str {
    template.split('/').nth(1).unwrap_or(template)
}

// Installation steps

/// Creates the temp workspace under the project root, returning its path.
fn temp_workspace(root: &Path) -> io::Result<PathBuf> {
    let temp = root.join(TEMP_DIR);
    fs::create_dir_all(&temp)?;
    Ok(temp)
}

/// Copies every manifest-declared binary present in the extracted archive
/// into `bin/`, then the shared dependency files. The manifest is a superset
/// of what any single archive ships, so absent entries are skipped silently;
/// nothing is created for them.
fn install_binaries_from(temp: &Path, root: &Path) -> io::Result<()> {
    let bin_dir = root.join("bin");
    if !bin_dir.exists() {
        fs::create_dir_all(&bin_dir)?;
    }

    for (platform, architectures) in BINARIES {
        for (arch, binary_file) in *architectures {
            let source = temp.join(binary_file);
            if source.exists() {
                log_debug!(
                    "[Downloader] Installing {} binary for {}-{}",
                    binary_file.bold(),
                    platform,
                    arch
                );
                fs::copy(&source, bin_dir.join(binary_file))?;
            }
        }
    }

    for dependency in DEPENDENCIES {
        let source = temp.join(dependency);
        if source.exists() {
            fs::copy(&source, bin_dir.join(dependency))?;
        }
    }

    Ok(())
}

/// Copies the extracted template scaffold (`<repo>-main/`) over the project
/// root, overwriting conflicting paths, then clears the temp workspace.
fn install_template_from(temp: &Path, template: &str, root: &Path) -> io::Result<()> {
    let scaffold = temp.join(format!("{}-main", repo_name_from_template(template)));
    if !scaffold.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "Template archive did not contain the expected {} directory",
                scaffold.display()
            ),
        ));
    }

    copy_dir_recursive(&scaffold, root)?;
    clear_directory(temp)
}

// Orchestration entry points

/// Downloads a project template archive and lays its scaffold over the
/// project root. Fetch, extraction, and copy failures propagate; nothing
/// already copied is rolled back.
pub fn download_template(root: &Path, template: &str, proxy: Option<&str>) -> io::Result<()> {
    let temp = temp_workspace(root)?;
    let zip_path = temp.join("template.zip");

    log_info!("Downloading the {} template..", template.bold());
    download_file(&template_download_url(template), &zip_path, proxy)?;

    log_info!("Extracting template zip file...");
    extract_zip(&zip_path, &temp)?;

    install_template_from(&temp, template, root)
}

/// Downloads the framework binaries archive for the configured (or latest)
/// version and installs the manifest-selected files into `bin/`.
pub fn download_and_update_binaries(
    root: &Path,
    config: &mut AppConfig,
    latest: bool,
    proxy: Option<&str>,
) -> io::Result<()> {
    let temp = temp_workspace(root)?;
    let zip_path = temp.join("binaries.zip");

    log_info!("Downloading Neutralinojs binaries..");
    let url = binary_download_url(root, config, latest, proxy)?;
    download_file(&url, &zip_path, proxy)?;

    log_info!("Extracting binaries.zip file...");
    extract_zip(&zip_path, &temp)?;

    log_info!("Finalizing and cleaning temp. files.");
    install_binaries_from(&temp, root)?;
    clear_directory(&temp)
}

/// Downloads the client script and its type declarations into the configured
/// client-library path. Opt-in: without a configured `cli.clientLibrary`
/// this is a successful no-op that performs no network request.
pub fn download_and_update_client(
    root: &Path,
    config: &mut AppConfig,
    latest: bool,
    proxy: Option<&str>,
) -> io::Result<()> {
    let Some(client_library) = config.cli.client_library.clone() else {
        log_info!(
            "neu CLI won't download the client library -- download @neutralinojs/lib from your Node package manager."
        );
        return Ok(());
    };
    let client_library = trim_path(&client_library).to_string();

    let extension = script_extension(config);
    // One lookup serves both the script and the types download.
    let version = resolve_client_version(root, config, latest, proxy)?;

    let temp = temp_workspace(root)?;

    log_info!("Downloading the Neutralinojs client..");
    let script_path = temp.join(client_artifact_name(extension));
    download_file(&client_download_url(&version, extension), &script_path, proxy)?;

    log_info!("Downloading the Neutralinojs types..");
    let types_path = temp.join(client_artifact_name("d.ts"));
    download_file(&client_download_url(&version, "d.ts"), &types_path, proxy)?;

    log_info!("Finalizing and cleaning temp. files...");
    let destination = root.join(&client_library);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&script_path, &destination)?;
    fs::copy(&types_path, types_sibling(&destination))?;

    clear_directory(&temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::files::CONFIG_FILE;
    use crate::libs::utilities::compression::write_zip;
    use crate::schema::CliConfig;

    fn config_with(
        binary_version: Option<&str>,
        client_version: Option<&str>,
        client_library: Option<&str>,
    ) -> AppConfig {
        AppConfig {
            cli: CliConfig {
                binary_version: binary_version.map(String::from),
                client_version: client_version.map(String::from),
                client_library: client_library.map(String::from),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn transport_failure_resolves_to_nightly() {
        // Nothing listens on the loopback discard port, so the GET fails at
        // the transport level. The resolver must still hand back a usable
        // version token.
        let version = resolve_from_url("http://127.0.0.1:9/releases/latest", "neutralinojs", None);
        assert_eq!(version, "nightly");
    }

    #[test]
    fn release_tag_is_stripped_of_its_prefix() {
        let release: Release = serde_json::from_str(r#"{"tag_name": "v5.2.0"}"#).unwrap();
        assert_eq!(tag_to_version(release).as_deref(), Some("5.2.0"));
    }

    #[test]
    fn release_without_tag_name_yields_no_version() {
        let release: Release = serde_json::from_str(r#"{"html_url": "x"}"#).unwrap();
        assert_eq!(tag_to_version(release), None);
    }

    #[test]
    fn stored_version_is_reused_without_resolution() {
        let (version, fresh) = select_version(Some("5.0.0"), false, || {
            panic!("no lookup may happen when a stored version is reusable")
        });
        assert_eq!(version, "5.0.0");
        assert!(!fresh);
    }

    #[test]
    fn forced_refresh_overrides_a_stored_version() {
        let (version, fresh) = select_version(Some("5.0.0"), true, || "5.3.0".to_string());
        assert_eq!(version, "5.3.0");
        assert!(fresh);
    }

    #[test]
    fn absent_version_forces_resolution() {
        let (version, fresh) = select_version(None, false, || "5.3.0".to_string());
        assert_eq!(version, "5.3.0");
        assert!(fresh);
    }

    #[test]
    fn binaries_url_renders_the_tag_form() {
        assert_eq!(
            render_binaries_url("5.2.0"),
            "https://github.com/neutralinojs/neutralinojs/releases/download/v5.2.0/neutralinojs-v5.2.0.zip"
        );
        assert_eq!(
            render_binaries_url("nightly"),
            "https://github.com/neutralinojs/neutralinojs/releases/download/nightly/neutralinojs-nightly.zip"
        );
    }

    #[test]
    fn stored_binary_version_is_used_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config_with(Some("5.0.0"), None, None);

        // No network reachable here: reuse must not attempt a lookup, and it
        // must not rewrite the config file either.
        let url = binary_download_url(tmp.path(), &mut config, false, None).unwrap();
        assert!(url.contains("/v5.0.0/"));
        assert!(!tmp.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn script_extension_follows_the_configured_library_path() {
        let module_config = config_with(None, None, Some("resources/js/neutralino.mjs"));
        let plain_config = config_with(None, None, Some("resources/js/neutralino.js"));

        assert_eq!(script_extension(&module_config), "mjs");
        assert_eq!(script_extension(&plain_config), "js");
        // No configured library at all falls back to the default extension.
        assert_eq!(script_extension(&config_with(None, None, None)), "js");
    }

    #[test]
    fn client_url_and_local_artifact_use_the_same_extension() {
        let config = config_with(None, None, Some("resources/js/neutralino.mjs"));
        let extension = script_extension(&config);

        let url = client_download_url("5.2.0", extension);
        let artifact = client_artifact_name(extension);

        assert!(url.ends_with(".mjs"));
        assert!(url.contains("/v5.2.0/"));
        assert_eq!(artifact, "neutralino.mjs");
    }

    #[test]
    fn template_identifier_maps_to_archive_url_and_scaffold_name() {
        assert_eq!(
            template_download_url("neutralinojs/neutralinojs-minimal"),
            "https://github.com/neutralinojs/neutralinojs-minimal/archive/main.zip"
        );
        assert_eq!(
            repo_name_from_template("neutralinojs/neutralinojs-minimal"),
            "neutralinojs-minimal"
        );
    }

    #[test]
    fn only_manifest_files_present_in_the_archive_are_installed() {
        let tmp = tempfile::tempdir().unwrap();
        let temp = tmp.path().join(".tmp");
        fs::create_dir_all(&temp).unwrap();

        // A subset of the manifest, plus an undeclared stray file.
        fs::write(temp.join("neutralino-linux_x64"), "elf").unwrap();
        fs::write(temp.join("neutralino-win_x64.exe"), "pe").unwrap();
        fs::write(temp.join("WebView2Loader.dll"), "dll").unwrap();
        fs::write(temp.join("stray-file"), "ignored").unwrap();

        install_binaries_from(&temp, tmp.path()).unwrap();

        let bin = tmp.path().join("bin");
        assert!(bin.join("neutralino-linux_x64").exists());
        assert!(bin.join("neutralino-win_x64.exe").exists());
        assert!(bin.join("WebView2Loader.dll").exists());
        // Absent manifest entries produce no placeholder.
        assert!(!bin.join("neutralino-mac_x64").exists());
        // Files the manifest does not declare are not installed.
        assert!(!bin.join("stray-file").exists());
    }

    #[test]
    fn template_scaffold_is_copied_over_the_project_root() {
        let tmp = tempfile::tempdir().unwrap();
        let temp = tmp.path().join(".tmp");

        // Simulate a fetched-and-extracted template archive.
        fs::create_dir_all(&temp).unwrap();
        let archive = temp.join("template.zip");
        write_zip(
            &archive,
            &[
                ("myapp-main/neutralino.config.json", "{}"),
                ("myapp-main/resources/index.html", "<html></html>"),
            ],
        );
        extract_zip(&archive, &temp).unwrap();

        install_template_from(&temp, "someone/myapp", tmp.path()).unwrap();

        assert!(tmp.path().join("neutralino.config.json").exists());
        assert!(tmp.path().join("resources/index.html").exists());
        // The workspace is cleared as the final step.
        assert!(!temp.exists());
    }

    #[test]
    fn template_archive_without_the_expected_scaffold_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let temp = tmp.path().join(".tmp");
        fs::create_dir_all(&temp).unwrap();

        let err = install_template_from(&temp, "someone/myapp", tmp.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn client_download_without_a_configured_library_is_a_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config_with(None, None, None);

        // Succeeds offline: no request is issued, no workspace is created.
        download_and_update_client(tmp.path(), &mut config, false, None).unwrap();
        assert!(!tmp.path().join(TEMP_DIR).exists());
        assert!(config.cli.client_version.is_none());
    }
}
