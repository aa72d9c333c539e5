//! Error types.
//!
//! Errors are grouped by the layer that raises them. Callers that need to
//! tell a misconfigured server apart from a bad link should match on
//! [`Error::kind`]; anything shown to an end user should go through
//! [`Error::public_message`].

use thiserror::Error;

/// Message shown to end users for any token that fails to open.
pub const INVALID_LINK_MESSAGE: &str = "invalid or expired link";

/// Message shown to end users when the server itself is at fault.
pub const SERVER_ERROR_MESSAGE: &str = "something went wrong, please try again later";

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors. All of these are operator faults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing secret: environment variable {var} is not set")]
    MissingSecret { var: String },

    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown cipher: {0} (supported: aes-256-gcm, chacha20-poly1305)")]
    UnknownCipher(String),
}

/// Errors raised while minting or opening a token.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token is not structurally valid.
    #[error("invalid token: {0}")]
    Format(String),

    /// The authentication tag did not verify.
    ///
    /// Carries no detail: a wrong key, a flipped bit and a forged tag all
    /// look the same.
    #[error("tag mismatch")]
    Authentication,

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Coarse classification used for logging and status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Secret or config problem; the server is at fault.
    Configuration,
    /// The token could not be decoded or framed.
    Format,
    /// The token decoded but failed authentication.
    Authentication,
    /// Anything else (I/O, serialization of outgoing payloads).
    Internal,
}

impl ErrorKind {
    /// Stable lowercase name, suitable as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Format => "format",
            Self::Authentication => "authentication",
            Self::Internal => "internal",
        }
    }
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Token(TokenError::Format(_)) => ErrorKind::Format,
            Self::Token(TokenError::Authentication) => ErrorKind::Authentication,
            Self::Token(TokenError::Encryption(_) | TokenError::Payload(_)) => {
                ErrorKind::Internal
            }
            Self::InvalidInput(_) => ErrorKind::Format,
            Self::Io(_) => ErrorKind::Internal,
        }
    }

    /// True when the caller sent a bad token, as opposed to a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Format | ErrorKind::Authentication)
    }

    /// Message safe to show an end user.
    ///
    /// Format and authentication failures collapse into one message so a
    /// link's recipient cannot tell them apart.
    pub fn public_message(&self) -> &'static str {
        if self.is_client_error() {
            INVALID_LINK_MESSAGE
        } else {
            SERVER_ERROR_MESSAGE
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
