use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    envx completions bash > ~/.bash_completion.d/envx\n\n\
                  Generate zsh completions:\n    envx completions zsh > ~/.zfunc/_envx\n\n\
                  Generate fish completions:\n    envx completions fish > ~/.config/fish/completions/envx.fish\n\n\
                  Generate PowerShell completions:\n    envx completions powershell")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
