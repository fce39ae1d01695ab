//! Install flow
//!
//! One install is a straight line: stage the lock URI, resolve metadata,
//! check entry-point conflicts, create the environment, publish entry points.
//! The conflict check runs before anything is created, so a decline there has
//! no side effects; the only rollback is the missing-entry-points decline in
//! the publish step.

pub mod conflicts;
pub mod environment;
pub mod fetch;
pub mod links;

use crate::config::Settings;
use crate::error::{EnvxError, Result};
use crate::prompt::Prompter;
use crate::resolver::resolve_metadata;
use environment::EnvironmentBuilder;

/// Run one install from a lock URI
pub fn install_from_lock(
    settings: &Settings,
    lock_uri: &str,
    package_name: Option<&str>,
    entry_points: Option<&[String]>,
    builder: &dyn EnvironmentBuilder,
    prompter: &dyn Prompter,
) -> Result<()> {
    let staging = crate::temp::staging_dir()?;
    let lock_path = fetch::stage_lockfile(lock_uri, staging.path())?;

    let metadata = resolve_metadata(&lock_path, package_name, entry_points)?;
    let Some(name) = metadata.package_name.clone() else {
        return Err(EnvxError::MissingPackageName);
    };
    let installation_path = settings.package_dir(&name);

    let found = conflicts::find_conflicts(&metadata, &settings.bin_dir);
    conflicts::confirm_overwrite(&found, &settings.bin_dir, prompter)?;

    let prepared = environment::prepare_lockfile(&lock_path, staging.path())?;
    builder.create_environment(&prepared, &installation_path)?;
    println!("Installed {} in {}", name, installation_path.display());

    links::publish_entry_points(&installation_path, &metadata, &settings.bin_dir, prompter)?;

    Ok(())
}
