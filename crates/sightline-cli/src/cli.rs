//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// Sightline CLI - look up threat intelligence for observables.
#[derive(Debug, Parser)]
#[command(name = "sightline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Qualys IOC API base URL (overrides the config file)
    #[arg(long, env = "SIGHTLINE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token for the API (overrides the config file)
    #[arg(long, env = "SIGHTLINE_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the supported observable kinds
    Kinds,

    /// Fetch CTIM entities for an observable
    Observe(ObservableArgs),

    /// Print a browsable hunting-search URL for an observable
    Refer(ObservableArgs),

    /// Show or update the configuration file
    Config {
        /// What to do with the configuration
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file contents
    Show,

    /// Persist the global `--api-url` / `--token` overrides to the file
    Set,
}

/// An observable given as kind tag plus raw value.
#[derive(Debug, Args)]
pub struct ObservableArgs {
    /// Observable kind tag (see `sightline kinds`)
    pub kind: String,

    /// Observable value (hash, path, address, ...)
    pub value: String,
}
