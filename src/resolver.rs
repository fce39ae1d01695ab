//! Metadata resolution
//!
//! Produces the authoritative (package name, entry points) pair an install
//! runs with, reconciling lockfile metadata against caller overrides.
//! Overrides always win over embedded values; a malformed lockfile degrades
//! to overrides-only metadata rather than failing the install.

use std::path::Path;

use console::Style;

use crate::error::{EnvxError, Result};
use crate::lockfile::{CombinedLockfile, LockfileMetadata};

/// Resolve the metadata an install will run with.
///
/// Overrides are `Option` so "not passed" and "explicitly empty" stay
/// distinct: `Some(&[])` really does install with zero entry points, while
/// `None` defers to whatever the lockfile embeds.
pub fn resolve_metadata(
    lock_path: &Path,
    package_name: Option<&str>,
    entry_points: Option<&[String]>,
) -> Result<LockfileMetadata> {
    let mut metadata = match CombinedLockfile::from_path(lock_path) {
        Ok(lock) => lock.metadata.unwrap_or_default(),
        Err(EnvxError::MalformedLockfile { .. }) => {
            if entry_points.is_none() {
                println!(
                    "{} Failed to parse metadata in lockfile and no entry_points provided. \
                     Creating the environment with no entry_points",
                    Style::new().yellow().bold().apply_to("Warning:")
                );
            }
            LockfileMetadata::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(name) = package_name {
        metadata.package_name = Some(name.to_string());
    }
    if let Some(eps) = entry_points {
        metadata.entry_points = eps.to_vec();
    }

    if metadata.package_name.is_none() {
        return Err(EnvxError::MissingPackageName);
    }

    Ok(metadata)
}
