// For working with file paths, specifically download destinations.
// `std::path::Path` is a powerful type for working with file paths in a robust way.
use std::path::Path;
// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;
// Our custom logging macros to give us nicely formatted (and colored!) output
// for debugging, general information, and errors.
use crate::{log_debug, log_error};
// For creating the destination file the response body is streamed into.
use std::fs::File;
// `std::io` contains core input/output functionalities and error types.
use std::io;

use crate::constants::USER_AGENT;

/// Builds the HTTP agent every outbound request goes through: a fixed
/// User-Agent header and, when configured, an HTTP proxy. Redirects are
/// followed by default, which release-asset downloads rely on (GitHub
/// serves them via a redirect to a CDN).
///
/// # Arguments
/// * `proxy`: Optional proxy address (host:port or a full URL) to route requests through.
///
/// # Returns
/// * `io::Result<ureq::Agent>`: The configured agent, or an error if the
///   proxy address cannot be parsed.
pub fn http_agent(proxy: Option<&str>) -> io::Result<ureq::Agent> {
    let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);

    if let Some(proxy) = proxy {
        log_debug!("[Utils] Routing HTTP requests through proxy: {}", proxy.blue());
        let proxy = ureq::Proxy::new(proxy)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid proxy: {}", e)))?;
        builder = builder.proxy(proxy);
    }

    Ok(builder.build())
}

/// Downloads a file from a given URL and saves it to a specified destination
/// on the local file system. This is how release archives, the client script,
/// and type declarations are fetched.
///
/// The response body is streamed straight into the destination file; binary
/// payloads are never buffered whole in memory.
///
/// # Arguments
/// * `url`: The URL of the file to download.
/// * `dest`: The local file system path where the downloaded file should be saved.
/// * `proxy`: Optional proxy address forwarded to the HTTP client.
///
/// # Returns
/// * `io::Result<()>`:
///   - `Ok(())` if the download was successful and the file was saved.
///   - An `io::Error` if the HTTP request failed (including non-2xx
///     statuses), or if file creation or the streaming copy failed.
pub fn download_file(url: &str, dest: &Path, proxy: Option<&str>) -> io::Result<()> {
    log_debug!("[Utils] Starting download from URL: {}", url.blue());

    let agent = http_agent(proxy)?;

    // Execute the HTTP GET request. `ureq` reports non-2xx statuses as
    // errors, so a missing release asset surfaces here rather than being
    // written to disk as an HTML error page.
    let response = match agent.get(url).call() {
        Ok(res) => res,
        Err(e) => {
            log_error!("[Utils] HTTP request failed for {}: {}", url.red(), e);
            return Err(io::Error::other(format!("HTTP error: {}", e)));
        }
    };

    // Open the destination file for writing, creating or truncating it.
    let mut file = File::create(dest)?;

    // Stream the response body directly into the local file.
    let mut reader = response.into_reader();
    io::copy(&mut reader, &mut file)?;

    log_debug!(
        "[Utils] File downloaded successfully to {}",
        dest.to_string_lossy().green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_failure_reports_an_error_not_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("never-written.zip");

        // TCP port 9 (discard) is not listening on loopback; the connection
        // is refused before any file is created.
        let result = download_file("http://127.0.0.1:9/asset.zip", &dest, None);
        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
