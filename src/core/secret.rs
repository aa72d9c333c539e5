//! Server-held secret and the key derived from it.

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::KEY_LEN;
use crate::error::{ConfigError, Result};

/// Raw secret material, wiped from memory on drop.
///
/// `Debug` is redacted so a secret never lands in a log line.
#[derive(Clone)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    /// Wrap raw secret bytes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "secret",
                reason: "secret must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self(Zeroizing::new(bytes)))
    }

    /// Read the secret from an environment variable.
    ///
    /// An unset or empty variable is treated as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSecret` naming the variable.
    pub fn from_env(var: &str) -> Result<Self> {
        debug!(var, "resolving secret");

        let value = std::env::var_os(var)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingSecret {
                var: var.to_string(),
            })?;

        Self::new(os_bytes(value))
    }

    /// Derive the 32-byte symmetric key (`SHA-256(secret)`).
    pub fn derive_key(&self) -> Key {
        let digest = Sha256::digest(self.0.as_slice());
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&digest);
        Key(key)
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed secret.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"[redacted]").finish()
    }
}

/// Derived symmetric key. Never serialized.
pub struct Key(Zeroizing<[u8; KEY_LEN]>);

impl Key {
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&"[redacted]").finish()
    }
}

#[cfg(unix)]
fn os_bytes(value: std::ffi::OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    value.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(value: std::ffi::OsString) -> Vec<u8> {
    value.to_string_lossy().into_owned().into_bytes()
}
