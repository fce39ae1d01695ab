//! Lock URI staging
//!
//! A lock URI is either a path on disk or an http(s) URL. URLs are downloaded
//! (following redirects) into the staging dir, so the rest of the install
//! flow only ever sees a local file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{EnvxError, Result};

/// File name for a downloaded lockfile inside the staging dir
const DOWNLOADED_LOCK_NAME: &str = "lock_file.lock.json";

const USER_AGENT: &str = concat!("envx/", env!("CARGO_PKG_VERSION"));

/// Resolve a lock URI to a readable local path, downloading when remote
pub fn stage_lockfile(lock_uri: &str, staging: &Path) -> Result<PathBuf> {
    if is_remote(lock_uri) {
        let target = staging.join(DOWNLOADED_LOCK_NAME);
        download(lock_uri, &target)?;
        return Ok(target);
    }

    let path = PathBuf::from(lock_uri);
    if path.exists() {
        Ok(path)
    } else {
        Err(EnvxError::LockfileNotFound {
            path: lock_uri.to_string(),
        })
    }
}

fn is_remote(lock_uri: &str) -> bool {
    lock_uri.starts_with("http://") || lock_uri.starts_with("https://")
}

fn download(url: &str, target: &Path) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} Fetching {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(url.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let outcome = fetch_bytes(url);
    pb.finish_and_clear();

    std::fs::write(target, outcome?)?;
    Ok(())
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::Client::new()
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|e| EnvxError::LockfileFetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(EnvxError::LockfileFetchFailed {
            url: url.to_string(),
            reason: format!("HTTP status {}", response.status()),
        });
    }

    let bytes = response.bytes().map_err(|e| EnvxError::LockfileFetchFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(bytes.to_vec())
}
