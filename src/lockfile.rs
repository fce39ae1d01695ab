//! Combined lockfile model
//!
//! A combined lockfile extends a package-manager explicit lockfile with
//! embedded installation metadata and artifact links for multiple platforms:
//!
//! ```json
//! {
//!   "metadata": {
//!     "package_name": "black",
//!     "entry_points": ["black", "blackd"]
//!   },
//!   "platform_tar_links": {
//!     "linux-64": ["https://conda.anaconda.org/conda-forge/linux-64/..."],
//!     "osx-64": ["https://conda.anaconda.org/conda-forge/osx-64/..."]
//!   }
//! }
//! ```
//!
//! Parse failure is recoverable by design: the file is then treated as a
//! package-manager native lockfile and handed over untouched.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EnvxError, Result};
use crate::platform::Platform;

/// Installation metadata embedded in a combined lockfile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockfileMetadata {
    /// Name of the package the environment is created for; must be known by
    /// the time installation proceeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Executables the package exposes, in publication order
    #[serde(default)]
    pub entry_points: Vec<String>,
}

/// A combined lockfile: per-platform artifact links plus optional metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedLockfile {
    /// Embedded installation metadata, if the producer included any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LockfileMetadata>,

    /// Artifact URLs keyed by platform identifier, each list in install order
    pub platform_tar_links: BTreeMap<String, Vec<String>>,
}

impl CombinedLockfile {
    /// Parse a combined lockfile from disk.
    ///
    /// Any read or parse failure is reported as `MalformedLockfile`; callers
    /// treat that as "not a combined lockfile" and fall back.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| EnvxError::MalformedLockfile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| EnvxError::MalformedLockfile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Artifact links for one platform, if the lockfile carries them
    pub fn links_for(&self, platform: Platform) -> Option<&[String]> {
        self.platform_tar_links
            .get(platform.as_str())
            .map(Vec::as_slice)
    }
}
