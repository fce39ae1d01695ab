//! Environment creation through an external conda-compatible package manager
//!
//! The subprocess boundary is the `EnvironmentBuilder` trait so the install
//! flow can be exercised without conda on the machine. The real builder
//! resolves `CONDA_EXE` first, then searches PATH for `conda`, `mamba` and
//! `micromamba` in that order.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use console::Style;

use crate::error::{EnvxError, Result};
use crate::lockfile::CombinedLockfile;
use crate::platform::Platform;

/// Tools accepted as conda-compatible, in preference order
const PACKAGE_MANAGERS: &[&str] = &["conda", "mamba", "micromamba"];

/// File name of the synthesized explicit lockfile inside the staging dir
const EXPLICIT_LOCK_NAME: &str = "lock_file.lock";

/// Creates an environment at a destination from a lockfile on disk
pub trait EnvironmentBuilder {
    /// Create the environment; a partial destination is left as-is on failure
    fn create_environment(&self, lockfile: &Path, destination: &Path) -> Result<()>;
}

/// Runs `create -y --prefix <dest> --file <lockfile>` on a located executable
#[derive(Debug)]
pub struct CondaBuilder {
    exe: PathBuf,
}

impl CondaBuilder {
    /// Use a specific executable
    pub fn new(exe: PathBuf) -> Self {
        CondaBuilder { exe }
    }

    /// Locate a conda-compatible executable: `CONDA_EXE` if it points at one,
    /// otherwise the first of `conda`, `mamba`, `micromamba` found on PATH
    pub fn locate() -> Result<Self> {
        if let Some(exe) = std::env::var_os("CONDA_EXE") {
            let exe = PathBuf::from(exe);
            if exe.is_file() {
                return Ok(CondaBuilder { exe });
            }
        }

        for tool in PACKAGE_MANAGERS {
            if let Some(exe) = find_on_path(tool) {
                return Ok(CondaBuilder { exe });
            }
        }

        Err(EnvxError::PackageManagerNotFound)
    }

    /// The executable this builder invokes
    pub fn exe(&self) -> &Path {
        &self.exe
    }
}

impl EnvironmentBuilder for CondaBuilder {
    fn create_environment(&self, lockfile: &Path, destination: &Path) -> Result<()> {
        let status = Command::new(&self.exe)
            .arg("create")
            .arg("-y")
            .arg("--prefix")
            .arg(destination)
            .arg("--file")
            .arg(lockfile)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| EnvxError::IoError {
                message: format!("Failed to run {}: {}", self.exe.display(), e),
            })?;

        if !status.success() {
            return Err(EnvxError::PackageManagerFailure {
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// `which`-style search: iterate PATH entries (honoring PATHEXT on Windows)
fn find_on_path(tool: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let extensions: Vec<String> = if cfg!(windows) {
        std::env::var("PATHEXT")
            .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
            .split(';')
            .map(|s| s.to_ascii_lowercase())
            .collect()
    } else {
        vec![String::new()]
    };

    for dir in std::env::split_paths(&path_var) {
        for ext in &extensions {
            let candidate = if ext.is_empty() {
                dir.join(tool)
            } else {
                dir.join(format!("{tool}{ext}"))
            };
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    None
}

/// Decide which lockfile the package manager actually installs from.
///
/// A combined lockfile is reduced to a package-manager-native explicit
/// lockfile (`@EXPLICIT` + the artifact links for the current platform)
/// written into the staging dir. Anything unparseable is assumed to already
/// be package-manager-native and is passed through untouched, with a warning.
pub fn prepare_lockfile(lock_path: &Path, staging: &Path) -> Result<PathBuf> {
    match CombinedLockfile::from_path(lock_path) {
        Ok(combined) => {
            let platform = Platform::current()?;
            let links =
                combined
                    .links_for(platform)
                    .ok_or_else(|| EnvxError::PlatformArtifactsMissing {
                        platform: platform.to_string(),
                    })?;

            let explicit_path = staging.join(EXPLICIT_LOCK_NAME);
            std::fs::write(&explicit_path, format!("@EXPLICIT\n{}", links.join("\n")))?;
            Ok(explicit_path)
        }
        Err(EnvxError::MalformedLockfile { .. }) => {
            println!(
                "{} No combined lock file, trying to install it directly with conda",
                Style::new().yellow().bold().apply_to("Warning:")
            );
            Ok(lock_path.to_path_buf())
        }
        Err(e) => Err(e),
    }
}
