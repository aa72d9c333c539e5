//! Linkseal - authenticated, URL-safe tokens for carrying state in links.
//!
//! A server mints a token from a short payload, embeds it in a query
//! parameter, and decodes it when the link comes back. Tokens are
//! encrypted and authenticated with a key derived from a server-held
//! secret, so they can be neither read nor altered by whoever holds the
//! link.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Mint a token
//! │   ├── decrypt       # Open a token
//! │   ├── inspect       # Show token framing
//! │   ├── secret        # Generate a secret
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # AEAD backends (AES-256-GCM, ChaCha20-Poly1305)
//!     ├── codec         # TokenCodec: encrypt/decrypt
//!     ├── config        # .linkseal.toml management
//!     ├── payload       # Record / raw string payloads
//!     ├── secret        # Secret loading and key derivation
//!     └── token         # nonce || tag || ciphertext framing, base64url
//! ```
//!
//! # Example
//!
//! ```
//! use linkseal::{Payload, Secret, TokenCodec};
//!
//! let codec = TokenCodec::new(&Secret::new("server-secret")?);
//! let token = codec.encrypt("role=provider")?;
//! assert_eq!(codec.decrypt(&token)?, Payload::Raw("role=provider".into()));
//! # Ok::<(), linkseal::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::codec::TokenCodec;
pub use crate::core::config::Config;
pub use crate::core::payload::Payload;
pub use crate::core::secret::Secret;
pub use crate::core::types::{Record, Token};
pub use crate::error::{Error, ErrorKind, Result};

/// Encrypt a payload with the process-wide default configuration.
///
/// The secret is read from `NEXT_URL_TOKEN_SECRET` on every call. Prefer
/// building one [`TokenCodec`] and sharing it when minting many tokens.
///
/// # Errors
///
/// Returns `ConfigError::MissingSecret` before any cryptographic work if
/// the secret is unset.
pub fn encrypt(payload: impl Into<Payload>) -> Result<Token> {
    TokenCodec::from_env()?.encrypt(payload)
}

/// Decrypt a token with the process-wide default configuration.
///
/// # Errors
///
/// Returns `ConfigError::MissingSecret` before any cryptographic work if
/// the secret is unset, otherwise the errors of [`TokenCodec::decrypt`].
pub fn decrypt(token: &str) -> Result<Payload> {
    TokenCodec::from_env()?.decrypt(token)
}
