/// Aetheria - procedural fantasy name generation
///
/// Core library providing language profiles, profile merging and the
/// name synthesizer, plus configuration and logging for the CLI.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
