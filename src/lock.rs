//! Advisory install lock
//!
//! One install runs at a time per installation root. The lock is an exclusive
//! advisory flock on `installing.lock` inside the root; acquisition waits up
//! to five minutes before giving up. Only contention is waited out; any other
//! lock failure aborts at once. The lock file itself stays behind after
//! release, it is part of the on-disk layout.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fs2::FileExt;

use crate::error::{EnvxError, Result};

/// Name of the lock file inside the installation root
pub const LOCK_FILE_NAME: &str = "installing.lock";

/// How long to wait for a concurrent install to release the lock
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60 * 5);

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Guard holding the exclusive install lock; released on drop
#[derive(Debug)]
pub struct InstallLock {
    file: File,
    path: PathBuf,
}

impl InstallLock {
    /// Acquire the install lock under `installation_root`, creating the root
    /// if needed. Waits up to `timeout` for another holder to release.
    pub fn acquire(installation_root: &Path, timeout: Duration) -> Result<Self> {
        std::fs::create_dir_all(installation_root)?;
        let path = installation_root.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        let deadline = Instant::now() + timeout;
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => return Ok(InstallLock { file, path }),
                Err(e) if !lock_contended(&e) => return Err(e.into()),
                Err(_) if Instant::now() < deadline => std::thread::sleep(POLL_INTERVAL),
                Err(_) => {
                    return Err(EnvxError::LockAcquisitionTimeout {
                        path: path.display().to_string(),
                    });
                }
            }
        }
    }

    /// Path of the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// True when the failure means another process holds the lock; anything else
/// (permissions, bad descriptor) will not clear up by waiting
fn lock_contended(err: &std::io::Error) -> bool {
    err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

impl Drop for InstallLock {
    fn drop(&mut self) {
        // Unlock only; the file stays behind for the next install
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
