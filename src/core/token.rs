//! Token framing and text encoding.
//!
//! A token is `nonce (12) || tag (16) || ciphertext`, rendered as URL-safe
//! base64 without padding. Decoding tolerates trailing `=` padding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::Serialize;

use crate::core::constants::{MIN_TOKEN_LEN, NONCE_LEN, TAG_LEN};
use crate::error::{Result, TokenError};

/// URL-safe alphabet, no padding on encode, optional padding on decode.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode raw bytes as token text.
pub fn encode(bytes: &[u8]) -> String {
    TOKEN_ENGINE.encode(bytes)
}

/// Decode token text into raw bytes.
///
/// # Errors
///
/// Returns `TokenError::Format` if the text is not URL-safe base64.
pub fn decode(token: &str) -> Result<Vec<u8>> {
    TOKEN_ENGINE
        .decode(token.trim())
        .map_err(|e| TokenError::Format(format!("not url-safe base64: {}", e)).into())
}

/// Borrowed view of a decoded token.
#[derive(Debug)]
pub struct Frame<'a> {
    pub nonce: &'a [u8; NONCE_LEN],
    pub tag: &'a [u8; TAG_LEN],
    pub ciphertext: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Split a decoded buffer into its parts.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Format` if the buffer is shorter than nonce + tag.
    pub fn split(buf: &'a [u8]) -> Result<Self> {
        if buf.len() < MIN_TOKEN_LEN {
            return Err(TokenError::Format(format!(
                "{} bytes, need at least {}",
                buf.len(),
                MIN_TOKEN_LEN
            ))
            .into());
        }

        let (nonce, rest) = buf.split_at(NONCE_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        Ok(Self {
            // Lengths are fixed by the split points above.
            nonce: nonce.try_into().map_err(|_| frame_error())?,
            tag: tag.try_into().map_err(|_| frame_error())?,
            ciphertext,
        })
    }

    /// Concatenate parts in wire order.
    pub fn join(nonce: &[u8; NONCE_LEN], tag: &[u8; TAG_LEN], ciphertext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_TOKEN_LEN + ciphertext.len());
        out.extend_from_slice(nonce);
        out.extend_from_slice(tag);
        out.extend_from_slice(ciphertext);
        out
    }

    pub fn layout(&self) -> TokenLayout {
        TokenLayout {
            nonce_len: self.nonce.len(),
            tag_len: self.tag.len(),
            ciphertext_len: self.ciphertext.len(),
        }
    }
}

fn frame_error() -> TokenError {
    TokenError::Format("malformed frame".to_string())
}

/// Framing summary of a token. Reveals nothing a holder of the token
/// could not compute themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenLayout {
    pub nonce_len: usize,
    pub tag_len: usize,
    pub ciphertext_len: usize,
}

impl TokenLayout {
    /// Total decoded length in bytes.
    pub fn total_len(&self) -> usize {
        self.nonce_len + self.tag_len + self.ciphertext_len
    }
}

/// Decode and frame a token without touching any key.
///
/// # Errors
///
/// Returns `TokenError::Format` for bad encoding or short buffers.
pub fn inspect(token: &str) -> Result<TokenLayout> {
    let buf = decode(token)?;
    Ok(Frame::split(&buf)?.layout())
}
