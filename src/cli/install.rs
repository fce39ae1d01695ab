use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from a local lockfile:\n    envx install -l ./black.lock.json black\n\n\
                   Install from a URL:\n    envx install -l https://example.com/black.lock.json black\n\n\
                   Override the published entry points:\n    envx install -l ./black.lock.json black black blackd\n\n\
                   Skip all confirmation prompts:\n    envx install -y -l ./black.lock.json black")]
pub struct InstallArgs {
    /// Lockfile to install from: a local path or an http(s) URL
    #[arg(long = "lock-uri", short = 'l', value_name = "URI")]
    pub lock_uri: Option<String>,

    /// Name of the package to install (always overrides the lockfile metadata)
    pub package_name: String,

    /// Entry points to publish (overrides the lockfile metadata when given)
    pub entry_points: Vec<String>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl InstallArgs {
    /// Entry-point overrides with "nothing passed" collapsed to `None`; shell
    /// syntax has no way to express an explicitly empty list
    pub fn entry_point_overrides(&self) -> Option<&[String]> {
        if self.entry_points.is_empty() {
            None
        } else {
            Some(&self.entry_points)
        }
    }
}
