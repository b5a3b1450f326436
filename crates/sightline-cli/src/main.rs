//! Sightline CLI - main entry point

use clap::Parser;
use sightline_cli::{Cli, CliError, Command, Config, ConfigAction, Formatter};
use sightline_mapper::Observer;
use sightline_transport::{QualysClient, StaticToken};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> sightline_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    match cli.command {
        Command::Kinds => {
            formatter.print_kinds(&sightline_mapper::list_kinds());
        }
        Command::Observe(args) => {
            let api_url = require(cli.api_url.or(config.api_url), "api_url")?;
            let token = require(cli.token.or(config.token), "token")?;

            let observer = Observer::new(QualysClient::new(StaticToken::new(token)));
            let bundle = observer.observe(&api_url, &args.kind, &args.value)?;
            formatter.print_bundle(&bundle)?;
        }
        Command::Refer(args) => {
            let api_url = require(cli.api_url.or(config.api_url), "api_url")?;
            println!(
                "{}",
                sightline_mapper::refer(&api_url, &args.kind, &args.value)?
            );
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let contents = toml::to_string_pretty(&config)
                    .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
                print!("{}", contents);
            }
            ConfigAction::Set => {
                if cli.api_url.is_none() && cli.token.is_none() {
                    return Err(CliError::Config(
                        "nothing to set; pass --api-url and/or --token".to_string(),
                    ));
                }
                let mut config = config;
                if let Some(api_url) = cli.api_url {
                    config.api_url = Some(api_url);
                }
                if let Some(token) = cli.token {
                    config.token = Some(token);
                }
                config.save()?;
                eprintln!("Configuration saved to {}", Config::path()?.display());
            }
        },
    }

    Ok(())
}

fn require(value: Option<String>, name: &str) -> Result<String, CliError> {
    value.ok_or_else(|| {
        CliError::Config(format!(
            "{} not set; pass --{} or add it to {}",
            name,
            name.replace('_', "-"),
            Config::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "~/.sightline/config.toml".to_string())
        ))
    })
}
