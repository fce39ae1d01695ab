//! Entry-point conflict detection
//!
//! Before any environment is created, every entry point the install would
//! publish is checked against the bin directory. Overwriting is opt-in; a
//! decline aborts the install with nothing touched.

use std::path::Path;

use crate::error::{EnvxError, Result};
use crate::lockfile::LockfileMetadata;
use crate::prompt::Prompter;

/// Entry points that already exist in the bin directory.
///
/// Checked via `symlink_metadata` so dangling symlinks count too: publishing
/// would overwrite them just the same.
pub fn find_conflicts(metadata: &LockfileMetadata, bin_dir: &Path) -> Vec<String> {
    metadata
        .entry_points
        .iter()
        .filter(|ep| bin_dir.join(ep.as_str()).symlink_metadata().is_ok())
        .cloned()
        .collect()
}

/// Ask the operator whether conflicting entry points may be overwritten.
///
/// No conflicts, no question. A decline aborts before any filesystem change.
pub fn confirm_overwrite(
    conflicts: &[String],
    bin_dir: &Path,
    prompter: &dyn Prompter,
) -> Result<()> {
    if conflicts.is_empty() {
        return Ok(());
    }

    // Show the resolved directory, not however the caller spelled it
    let shown = dunce::canonicalize(bin_dir).unwrap_or_else(|_| bin_dir.to_path_buf());
    let message = format!(
        "Entry points [{}] already exist in {}. Do you want to overwrite them?",
        conflicts.join(", "),
        shown.display()
    );
    if prompter.confirm(&message, false)? {
        Ok(())
    } else {
        Err(EnvxError::UserDeclinedConflict)
    }
}
