//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;

/// envx - lockfile-pinned tool installer
///
/// Install packages into isolated environments derived from dependency
/// lockfiles and expose their executables via symlinks.
#[derive(Parser, Debug)]
#[command(
    name = "envx",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install tools into isolated lockfile-pinned environments",
    long_about = "envx installs a package into its own environment derived from a dependency \
                  lockfile (via a conda-compatible package manager) and symlinks the package's \
                  entry points into your bin directory, so pinned tools are runnable from the \
                  shell without polluting any shared environment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  envx install -l ./black.lock.json black                  \x1b[90m# Install from a local lockfile\x1b[0m\n   \
                  envx install -l https://example.com/black.lock.json black \x1b[90m# Install from a URL\x1b[0m\n   \
                  envx install -l ./black.lock.json black black blackd     \x1b[90m# Override entry points\x1b[0m\n   \
                  envx install -y -l ./black.lock.json black               \x1b[90m# Never prompt\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Installation root under which each package gets its own environment
    #[arg(
        long,
        global = true,
        env = "ENVX_INSTALLATION_PATH",
        value_name = "DIR"
    )]
    pub installation_path: Option<PathBuf>,

    /// Directory where entry-point symlinks are published
    #[arg(long, global = true, env = "ENVX_BIN_DIR", value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a package from a dependency lockfile
    Install(InstallArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
