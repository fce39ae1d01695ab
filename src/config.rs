//! Installation target configuration
//!
//! Settings are resolved once at startup from CLI flags and environment
//! variables (merged by clap) with platform defaults filling the gaps, then
//! passed by reference into every component. Nothing reads environment
//! variables past this point.

use std::path::PathBuf;

use crate::error::{EnvxError, Result};

/// Default directory name under the platform's local data directory
const APP_DIR: &str = "envx";

/// Where environments are created and entry points are published
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root under which each package gets its own environment directory
    pub installation_path: PathBuf,

    /// Shared directory where entry-point symlinks are published
    pub bin_dir: PathBuf,
}

impl Settings {
    /// Resolve settings from optional overrides (CLI flag or environment
    /// variable, already merged by clap), falling back to platform defaults
    pub fn resolve(installation_path: Option<PathBuf>, bin_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Settings {
            installation_path: match installation_path {
                Some(path) => path,
                None => default_installation_path()?,
            },
            bin_dir: match bin_dir {
                Some(path) => path,
                None => default_bin_dir()?,
            },
        })
    }

    /// Environment directory for a package under the installation root
    pub fn package_dir(&self, package_name: &str) -> PathBuf {
        self.installation_path.join(package_name)
    }
}

/// `envx` under the platform's local data directory (e.g. ~/.local/share on
/// Linux), or `~/.envx` where no data directory is defined
fn default_installation_path() -> Result<PathBuf> {
    if let Some(base) = dirs::data_local_dir() {
        return Ok(base.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or_else(|| EnvxError::IoError {
        message: "Could not determine an installation directory".to_string(),
    })?;

    Ok(home.join(format!(".{APP_DIR}")))
}

/// The user-local executable directory, or ~/.local/bin where the platform
/// does not define one
fn default_bin_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::executable_dir() {
        return Ok(dir);
    }

    let home = dirs::home_dir().ok_or_else(|| EnvxError::IoError {
        message: "Could not determine a user bin directory".to_string(),
    })?;

    Ok(home.join(".local").join("bin"))
}
