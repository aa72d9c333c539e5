//! Constants used throughout linkseal.
//!
//! Centralizes token framing sizes and configuration defaults.

/// Configuration file name (.linkseal.toml).
pub const CONFIG_FILE: &str = ".linkseal.toml";

/// Environment variable holding the token secret when config does not
/// name another one.
pub const DEFAULT_SECRET_ENV: &str = "NEXT_URL_TOKEN_SECRET";

/// Environment variable controlling log filtering for the CLI.
pub const LOG_ENV: &str = "LINKSEAL_LOG";

/// Nonce length in bytes. Shared by every supported AEAD.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Derived key length in bytes (SHA-256 output).
pub const KEY_LEN: usize = 32;

/// Smallest decoded token: an empty payload still carries nonce and tag.
pub const MIN_TOKEN_LEN: usize = NONCE_LEN + TAG_LEN;

/// Default size of secrets produced by `linkseal secret`.
pub const DEFAULT_SECRET_BYTES: usize = 32;
