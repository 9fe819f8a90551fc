//! Command-line interface
//!
//! A thin presentation layer over the lifecycle engine: it parses arguments,
//! asks for confirmation where needed, and formats results.

mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands, RequestArgs};
pub use output::OutputFormatter;
