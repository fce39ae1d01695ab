//! envx - lockfile-pinned tool installer
//!
//! Installs a package into an isolated environment derived from a dependency
//! lockfile (via a conda-compatible package manager), then exposes the
//! package's executables through symlinks in the user's bin directory.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod installer;
mod lock;
mod lockfile;
mod platform;
mod prompt;
mod resolver;
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.installation_path, cli.bin_dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
