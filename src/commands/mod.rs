//! Command implementations for envx CLI

pub mod completions;
pub mod install;
pub mod version;
