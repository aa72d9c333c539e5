//! The token codec.
//!
//! Turns a short payload into an opaque, tamper-evident token that can ride
//! in a query string, and back.
//!
//! ```text
//! payload ──serialize──▶ plaintext ──AEAD(key, nonce)──▶ tag, ciphertext
//!                                   nonce || tag || ciphertext ──base64url──▶ token
//! ```
//!
//! A codec holds only its keyed cipher. It is immutable after construction
//! and `Send + Sync`, so one instance can be shared across request handlers.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::cipher::{Cipher, CipherBackend, CipherKind};
use crate::core::config::Config;
use crate::core::constants::NONCE_LEN;
use crate::core::payload::Payload;
use crate::core::secret::Secret;
use crate::core::token::{self, Frame, TokenLayout};
use crate::core::types::Token;
use crate::error::{Error, Result, TokenError};

/// Authenticated URL-token codec.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    cipher: CipherBackend,
}

impl TokenCodec {
    /// Create an AES-256-GCM codec keyed from `secret`.
    pub fn new(secret: &Secret) -> Self {
        Self::with_cipher(secret, CipherKind::default())
    }

    /// Create a codec with an explicit cipher backend.
    pub fn with_cipher(secret: &Secret, kind: CipherKind) -> Self {
        let key = secret.derive_key();
        Self {
            cipher: CipherBackend::new(kind, &key),
        }
    }

    /// Create a codec from configuration, resolving the secret from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSecret` if the secret is unset.
    pub fn from_config(config: &Config) -> Result<Self> {
        let secret = config.secret()?;
        Ok(Self::with_cipher(&secret, config.cipher()?))
    }

    /// Create a codec from default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSecret` if `NEXT_URL_TOKEN_SECRET` is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Cipher backend in use.
    pub fn cipher(&self) -> CipherKind {
        self.cipher.kind()
    }

    /// Encrypt a payload into a URL-safe token.
    ///
    /// Every call draws a fresh random nonce, so encrypting the same payload
    /// twice yields different tokens.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Payload` if a record cannot be serialized, or
    /// `TokenError::Encryption` if the OS RNG or cipher fails.
    pub fn encrypt(&self, payload: impl Into<Payload>) -> Result<Token> {
        let plaintext = payload.into().to_plaintext()?;
        self.encrypt_bytes(plaintext.into_bytes())
    }

    /// Encrypt any serializable value as JSON.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Payload` if `value` cannot be serialized.
    pub fn seal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Token> {
        let plaintext = serde_json::to_vec(value).map_err(TokenError::from)?;
        self.encrypt_bytes(plaintext)
    }

    /// Decrypt a token, returning a record when the plaintext is a JSON
    /// object and the raw string otherwise.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Format` for malformed tokens and
    /// `TokenError::Authentication` if the tag does not verify.
    pub fn decrypt(&self, token: &str) -> Result<Payload> {
        self.decrypt_raw(token).map(Payload::from_plaintext)
    }

    /// Decrypt a token without interpreting the plaintext.
    ///
    /// # Errors
    ///
    /// Same as [`TokenCodec::decrypt`].
    pub fn decrypt_raw(&self, token: &str) -> Result<String> {
        let plaintext = self.open_bytes(token).map_err(|e| {
            log_failure(&e);
            e
        })?;
        String::from_utf8(plaintext).map_err(|_| {
            let err: Error =
                TokenError::Format("payload is not valid UTF-8".to_string()).into();
            log_failure(&err);
            err
        })
    }

    /// Decrypt a token and deserialize its JSON payload into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`TokenCodec::decrypt`], plus `TokenError::Format` if the
    /// payload does not have the shape of `T`.
    pub fn open<T: DeserializeOwned>(&self, token: &str) -> Result<T> {
        let plaintext = self.decrypt_raw(token)?;
        serde_json::from_str(&plaintext).map_err(|e| {
            let err: Error = TokenError::Format(format!("unexpected payload: {}", e)).into();
            log_failure(&err);
            err
        })
    }

    /// Report a token's framing without decrypting it.
    ///
    /// This is a convenience wrapper around [`token::inspect`]; it uses no
    /// key material and gives the same answer for every codec.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Format` for malformed tokens.
    pub fn inspect(&self, token: &str) -> Result<TokenLayout> {
        token::inspect(token)
    }

    fn encrypt_bytes(&self, mut buffer: Vec<u8>) -> Result<Token> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| TokenError::Encryption(format!("rng failure: {}", e)))?;

        let tag = self.cipher.seal(&nonce, &mut buffer)?;
        let token = token::encode(&Frame::join(&nonce, &tag, &buffer));

        trace!(
            cipher = self.cipher.name(),
            payload_len = buffer.len(),
            token_len = token.len(),
            "encrypted"
        );
        Ok(token)
    }

    fn open_bytes(&self, token: &str) -> Result<Vec<u8>> {
        trace!(token_len = token.len(), "decrypting");

        let buf = token::decode(token)?;
        let frame = Frame::split(&buf)?;

        let mut plaintext = frame.ciphertext.to_vec();
        self.cipher.open(frame.nonce, &mut plaintext, frame.tag)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

fn log_failure(err: &Error) {
    debug!(kind = err.kind().as_str(), error = %err, "token rejected");
}
