//! Sightline CLI - operator interface for the Qualys IOC → CTIM mapping engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod error;
mod output;

pub use cli::{Cli, Command, ConfigAction, ObservableArgs};
pub use config::{Config, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
