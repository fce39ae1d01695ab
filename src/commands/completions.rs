//! Shell completions command

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Write completions for the chosen shell to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    generate(args.shell, &mut cmd, "envx", &mut std::io::stdout().lock());

    Ok(())
}
