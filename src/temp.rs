//! Staging directories for install operations
//!
//! One staging dir per install holds the downloaded lockfile and the
//! synthesized explicit lockfile; dropping the guard removes it on every
//! exit path. The base is always absolute, so a relative TMPDIR (TMPDIR=tmp)
//! cannot make staging land under the current working directory.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Result;

/// Create the staging directory for one install operation
pub fn staging_dir() -> Result<TempDir> {
    let dir = tempfile::Builder::new()
        .prefix("envx-")
        .tempdir_in(absolute_temp_base())?;
    Ok(dir)
}

/// `env::temp_dir()` when absolute, the platform fallback otherwise
fn absolute_temp_base() -> PathBuf {
    let base = std::env::temp_dir();
    if base.is_absolute() {
        return base;
    }

    #[cfg(windows)]
    {
        std::env::var_os("TEMP")
            .or_else(|| std::env::var_os("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}
