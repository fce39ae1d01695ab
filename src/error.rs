//! Error types and handling for envx
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for envx operations
#[derive(Error, Diagnostic, Debug)]
pub enum EnvxError {
    // Lockfile errors
    #[error("Failed to parse lockfile metadata: {path}")]
    #[diagnostic(
        code(envx::lockfile::malformed),
        help("The file is not a combined lockfile; it will be passed to the package manager as-is")
    )]
    MalformedLockfile { path: String, reason: String },

    #[error("Lockfile not found: {path}")]
    #[diagnostic(
        code(envx::lockfile::not_found),
        help("Check that the --lock-uri path exists or is a valid URL")
    )]
    LockfileNotFound { path: String },

    #[error("Failed to fetch lockfile from: {url}")]
    #[diagnostic(
        code(envx::lockfile::fetch_failed),
        help("Check that the URL is correct and reachable")
    )]
    LockfileFetchFailed { url: String, reason: String },

    #[error("Lockfile has no artifact links for platform '{platform}'")]
    #[diagnostic(
        code(envx::lockfile::platform_artifacts_missing),
        help("Regenerate the combined lockfile with this platform included")
    )]
    PlatformArtifactsMissing { platform: String },

    // Metadata errors
    #[error(
        "No package_name or metadata found in lockfile. \
         The package name is required to build an environment"
    )]
    #[diagnostic(
        code(envx::metadata::missing_package_name),
        help("Pass the package name as the first positional argument")
    )]
    MissingPackageName,

    // Platform errors
    #[error("Platform {os} not supported")]
    #[diagnostic(
        code(envx::platform::not_supported),
        help("Supported platforms: linux-64, osx-64, win-64")
    )]
    UnsupportedPlatform { os: String },

    // Install aborts
    #[error("Aborted: existing entry points left untouched")]
    #[diagnostic(code(envx::install::conflict_declined))]
    UserDeclinedConflict,

    #[error("Aborted: environment removed because entry points were missing")]
    #[diagnostic(code(envx::install::missing_entry_points_declined))]
    UserDeclinedMissingEntryPoints,

    // Package manager errors
    #[error("No conda-compatible package manager found")]
    #[diagnostic(
        code(envx::package_manager::not_found),
        help("Install conda, mamba or micromamba, or point CONDA_EXE at one")
    )]
    PackageManagerNotFound,

    #[error("Package manager failed with {status}")]
    #[diagnostic(code(envx::package_manager::failed))]
    PackageManagerFailure { status: String },

    // Locking
    #[error("Timed out waiting for install lock: {path}")]
    #[diagnostic(
        code(envx::lock::acquisition_timeout),
        help("Another envx install may be running; if not, remove the stale lock file")
    )]
    LockAcquisitionTimeout { path: String },

    // Prompting
    #[error("Failed to read confirmation: {reason}")]
    #[diagnostic(code(envx::prompt::failed))]
    PromptFailed { reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(envx::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for EnvxError {
    fn from(err: std::io::Error) -> Self {
        EnvxError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, EnvxError>;
