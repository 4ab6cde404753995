//! Configuration module

pub mod cli;
pub mod settings;

pub use cli::{ApCommand, CliArgs};
pub use settings::Settings;
