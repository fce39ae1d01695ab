//! Install command implementation
//!
//! The installation process:
//! 1. Resolve settings and prepare the installation root
//! 2. Acquire the advisory install lock
//! 3. Stage the lockfile and resolve metadata
//! 4. Check entry-point conflicts
//! 5. Create the environment via the package manager
//! 6. Publish entry-point symlinks
//!
//! Without a lock URI the command stops after step 2: the installation root
//! exists, nothing else happens.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::installer;
use crate::installer::environment::CondaBuilder;
use crate::lock::{ACQUIRE_TIMEOUT, InstallLock};
use crate::prompt::{AssumeYes, ConsolePrompter, Prompter};

/// Run install command
pub fn run(
    installation_path: Option<PathBuf>,
    bin_dir: Option<PathBuf>,
    args: InstallArgs,
) -> Result<()> {
    let mut settings = Settings::resolve(installation_path, bin_dir)?;

    let _lock = InstallLock::acquire(&settings.installation_path, ACQUIRE_TIMEOUT)?;
    // Canonicalize now that the root exists so symlink targets stay valid
    // from any working directory
    settings.installation_path = dunce::canonicalize(&settings.installation_path)?;

    let Some(lock_uri) = args.lock_uri.as_deref() else {
        return Ok(());
    };

    let builder = CondaBuilder::locate()?;
    let prompter: &dyn Prompter = if args.yes { &AssumeYes } else { &ConsolePrompter };

    installer::install_from_lock(
        &settings,
        lock_uri,
        Some(&args.package_name),
        args.entry_point_overrides(),
        &builder,
        prompter,
    )
}
