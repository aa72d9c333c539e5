//! AEAD backends.
//!
//! Every backend seals in place with a detached tag so the token codec can
//! lay out `nonce || tag || ciphertext` itself.
//!
//! ## Backends
//!
//! - **aes-256-gcm**: Default. Matches tokens minted by the web app.
//! - **chacha20-poly1305**: Constant-time in software; useful on hosts
//!   without AES instructions.
//!
//! Both use a 96-bit nonce and a 128-bit tag, so the token framing does
//! not depend on the backend. Tokens do not record which backend minted
//! them: opening with the wrong one fails authentication.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait in a new file
//! 2. Add a `CipherKind` variant and wire it into `CipherBackend`

use std::fmt;
use std::str::FromStr;

use aes_gcm::aead::{AeadInPlace, Nonce, Tag};

use crate::core::constants::{NONCE_LEN, TAG_LEN};
use crate::error::{ConfigError, Error, Result, TokenError};

mod aes;
mod backend;
mod chacha;

pub use aes::AesGcm;
pub use backend::CipherBackend;
pub use chacha::ChaChaPoly;

/// Authenticated cipher with a detached tag.
pub trait Cipher: Send + Sync {
    /// Backend name for display/config.
    fn name(&self) -> &'static str;

    /// Encrypt `buffer` in place and return the authentication tag.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encryption` if the backend refuses the input.
    fn seal(&self, nonce: &[u8; NONCE_LEN], buffer: &mut [u8]) -> Result<[u8; TAG_LEN]>;

    /// Verify `tag` and decrypt `buffer` in place.
    ///
    /// `buffer` is left unspecified on failure and must be discarded.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Authentication` if the tag does not verify.
    fn open(&self, nonce: &[u8; NONCE_LEN], buffer: &mut [u8], tag: &[u8; TAG_LEN])
        -> Result<()>;
}

/// Selectable AEAD algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CipherKind {
    #[default]
    Aes256Gcm,
    ChaCha20Poly1305,
}

impl CipherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256Gcm => "aes-256-gcm",
            Self::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes-256-gcm" | "aes256gcm" => Ok(Self::Aes256Gcm),
            "chacha20-poly1305" | "chacha20poly1305" => Ok(Self::ChaCha20Poly1305),
            other => Err(ConfigError::UnknownCipher(other.to_string()).into()),
        }
    }
}

/// Shared detached-seal for any 96-bit-nonce, 128-bit-tag AEAD.
pub(crate) fn seal_detached<A: AeadInPlace>(
    aead: &A,
    nonce: &[u8; NONCE_LEN],
    buffer: &mut [u8],
) -> Result<[u8; TAG_LEN]> {
    let tag = aead
        .encrypt_in_place_detached(Nonce::<A>::from_slice(nonce), b"", buffer)
        .map_err(|_| TokenError::Encryption("payload rejected by cipher".to_string()))?;

    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(&tag);
    Ok(out)
}

/// Shared detached-open for any 96-bit-nonce, 128-bit-tag AEAD.
pub(crate) fn open_detached<A: AeadInPlace>(
    aead: &A,
    nonce: &[u8; NONCE_LEN],
    buffer: &mut [u8],
    tag: &[u8; TAG_LEN],
) -> Result<()> {
    aead.decrypt_in_place_detached(
        Nonce::<A>::from_slice(nonce),
        b"",
        buffer,
        Tag::<A>::from_slice(tag),
    )
    .map_err(|_| TokenError::Authentication.into())
}
