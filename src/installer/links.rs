//! Entry point publication
//!
//! Verifies the freshly created environment actually ships the expected
//! executables, then publishes each one as a symlink in the bin directory.
//! Declining to continue past missing entry points removes the whole
//! environment again; that removal is the only rollback in the install flow.

use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::symlink;
#[cfg(windows)]
use std::os::windows::fs::symlink_file as symlink;

use crate::error::{EnvxError, Result};
use crate::lockfile::LockfileMetadata;
use crate::prompt::Prompter;

/// Publish the metadata's entry points from `installation_path/bin` into
/// `bin_dir`, replacing whatever sits at the destination names.
///
/// Symlinks are created one by one with no transactional guarantee; an IO
/// error mid-loop leaves earlier links in place.
pub fn publish_entry_points(
    installation_path: &Path,
    metadata: &LockfileMetadata,
    bin_dir: &Path,
    prompter: &dyn Prompter,
) -> Result<()> {
    let env_bin = installation_path.join("bin");
    let missing: Vec<String> = metadata
        .entry_points
        .iter()
        .filter(|ep| !env_bin.join(ep.as_str()).exists())
        .cloned()
        .collect();

    if !missing.is_empty() {
        let message = format!(
            "Missing entry points: [{}]. Do you want to continue?",
            missing.join(", ")
        );
        if !prompter.confirm(&message, false)? {
            println!("Removing environment");
            std::fs::remove_dir_all(installation_path)?;
            return Err(EnvxError::UserDeclinedMissingEntryPoints);
        }
    }

    std::fs::create_dir_all(bin_dir)?;
    for ep in &metadata.entry_points {
        if missing.contains(ep) {
            continue;
        }
        replace_with_symlink(&env_bin.join(ep), &bin_dir.join(ep))?;
        println!("Created entry point {ep} in your bin directory");
    }

    Ok(())
}

/// Remove whatever exists at `dst` (dangling symlinks included) and symlink
/// it to `src`
fn replace_with_symlink(src: &Path, dst: &Path) -> Result<()> {
    match std::fs::remove_file(dst) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    symlink(src, dst)?;
    Ok(())
}
