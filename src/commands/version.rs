//! Version command implementation

use crate::error::Result;
use crate::platform::Platform;

/// Run version command
pub fn run() -> Result<()> {
    println!("envx {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Platform: {}", platform_id());
    println!("  Profile: {}", build_profile());

    Ok(())
}

/// The lockfile platform identifier, or the raw OS name where envx cannot
/// install anyway
fn platform_id() -> String {
    match Platform::current() {
        Ok(platform) => platform.to_string(),
        Err(_) => format!("{} (unsupported)", std::env::consts::OS),
    }
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
