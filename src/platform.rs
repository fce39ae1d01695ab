//! Host platform detection
//!
//! Combined lockfiles key their artifact links by conda platform identifier.
//! Exactly three platforms are supported; anything else is a hard error at
//! install time, before any filesystem changes.

use crate::error::{EnvxError, Result};

/// Platform identifier used as a key in combined lockfiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux64,
    Osx64,
    Win64,
}

impl Platform {
    /// The identifier string as it appears in lockfile keys
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Linux64 => "linux-64",
            Platform::Osx64 => "osx-64",
            Platform::Win64 => "win-64",
        }
    }

    /// Map an OS name (as reported by `std::env::consts::OS`) to a platform identifier
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(Platform::Linux64),
            "macos" => Ok(Platform::Osx64),
            "windows" => Ok(Platform::Win64),
            other => Err(EnvxError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Detect the platform of the running host
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
