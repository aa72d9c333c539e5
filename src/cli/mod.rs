//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod inspect;
pub mod output;
pub mod secret;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::cipher::CipherKind;
use crate::core::codec::TokenCodec;
use crate::core::config::Config;
use crate::core::constants::DEFAULT_SECRET_BYTES;
use crate::error::Result;

/// Linkseal - authenticated, URL-safe tokens for links.
#[derive(Parser)]
#[command(
    name = "linkseal",
    about = "Mint and open authenticated URL-safe tokens",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: ./.linkseal.toml when present)
    #[arg(long, global = true, env = "LINKSEAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured cipher (aes-256-gcm, chacha20-poly1305)
    #[arg(long, global = true)]
    pub cipher: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a payload into a token (use - to read stdin)
    Encrypt {
        /// Payload text
        payload: String,
        /// Treat the payload as a JSON object record
        #[arg(long)]
        json: bool,
    },

    /// Decrypt a token (use - to read stdin)
    Decrypt {
        /// Token text
        token: String,
        /// Print the plaintext without parsing records
        #[arg(long)]
        raw: bool,
    },

    /// Show a token's framing without decrypting it
    Inspect {
        /// Token text
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random secret suitable for NEXT_URL_TOKEN_SECRET
    Secret {
        /// Number of random bytes
        #[arg(long, default_value_t = DEFAULT_SECRET_BYTES)]
        bytes: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Log line format.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Execute a command.
pub fn execute(command: Command, config: Option<PathBuf>, cipher: Option<String>) -> Result<()> {
    use Command::*;

    match command {
        Encrypt { payload, json } => {
            let codec = codec(config.as_deref(), cipher.as_deref())?;
            encrypt::execute(&codec, &read_arg(payload)?, json)
        }
        Decrypt { token, raw } => {
            let codec = codec(config.as_deref(), cipher.as_deref())?;
            decrypt::execute(&codec, &read_arg(token)?, raw)
        }
        Inspect { token, json } => inspect::execute(&read_arg(token)?, json),
        Secret { bytes } => secret::execute(bytes),
        Completions { shell } => completions::execute(shell),
    }
}

/// Resolve configuration from an explicit path or the current directory,
/// applying a cipher override.
pub fn load_config(path: Option<&Path>, cipher: Option<&str>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    if let Some(name) = cipher {
        config.token.cipher = name.parse::<CipherKind>()?.as_str().to_string();
    }

    debug!(cipher = %config.token.cipher, "using config");
    Ok(config)
}

fn codec(path: Option<&Path>, cipher: Option<&str>) -> Result<TokenCodec> {
    TokenCodec::from_config(&load_config(path, cipher)?)
}

/// Read an argument, or stdin when the argument is `-`.
///
/// A single trailing newline is dropped so piped input behaves like an
/// argument.
fn read_arg(arg: String) -> Result<String> {
    if arg != "-" {
        return Ok(arg);
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
