//! Linkseal - authenticated, URL-safe tokens for links.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linkseal::cli::output;
use linkseal::cli::{execute, Cli, LogFormat};
use linkseal::core::constants::LOG_ENV;
use linkseal::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("linkseal=debug")
        } else {
            EnvFilter::new("linkseal=warn")
        }
    });

    // Logs go to stderr so tokens on stdout stay pipeable.
    match cli.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    if let Err(e) = execute(cli.command, cli.config, cli.cipher) {
        tracing::debug!(kind = e.kind().as_str(), "command failed");

        let suggestion = match &e {
            Error::Config(ConfigError::MissingSecret { var }) => {
                Some(format!("set {} (generate one with: linkseal secret)", var))
            }
            Error::Config(ConfigError::UnknownCipher(_)) => {
                Some("use --cipher aes-256-gcm or --cipher chacha20-poly1305".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
