//! Configuration file management.
//!
//! Handles reading and validating `.linkseal.toml`. The file is optional;
//! without it the secret comes from `NEXT_URL_TOKEN_SECRET` and tokens use
//! AES-256-GCM.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher::CipherKind;
use crate::core::constants;
use crate::core::secret::Secret;
use crate::core::types::EnvVar;
use crate::error::{ConfigError, Result};

/// Codec configuration stored in `.linkseal.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: TokenConfig,
}

/// `[token]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Environment variable holding the secret
    #[serde(default = "default_secret_env")]
    pub secret_env: EnvVar,
    /// AEAD backend name, checked by `validate()`
    #[serde(default = "default_cipher")]
    pub cipher: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret_env: default_secret_env(),
            cipher: default_cipher(),
        }
    }
}

fn default_secret_env() -> EnvVar {
    constants::DEFAULT_SECRET_ENV.to_string()
}

fn default_cipher() -> String {
    CipherKind::default().as_str().to_string()
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.linkseal.toml` from the current directory if present,
    /// otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists and is unreadable or invalid.
    pub fn discover() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(
            secret_env = %config.token.secret_env,
            cipher = %config.token.cipher,
            "config loaded"
        );

        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or a validation error.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `secret_env` is not a usable
    /// environment variable name, or `ConfigError::UnknownCipher` if
    /// `cipher` names no supported backend.
    pub fn validate(&self) -> Result<()> {
        let var = self.token.secret_env.as_str();

        if var.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "token.secret_env",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if var.contains('=') || var.contains('\0') || var.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "token.secret_env",
                reason: format!("not a valid environment variable name: {:?}", var),
            }
            .into());
        }

        self.cipher()?;
        Ok(())
    }

    /// Resolve the secret named by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSecret` if the variable is unset or empty.
    pub fn secret(&self) -> Result<Secret> {
        Secret::from_env(&self.token.secret_env)
    }

    /// Configured cipher backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownCipher` for unsupported names.
    pub fn cipher(&self) -> Result<CipherKind> {
        self.token.cipher.parse()
    }
}
