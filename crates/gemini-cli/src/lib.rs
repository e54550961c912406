/*
[INPUT]:  Public API exports for gemini-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod command;
pub mod config;

pub use command::Command;
pub use config::CliConfig;
