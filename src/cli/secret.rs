//! Secret command.
//!
//! Generates random secret material, encoded URL-safe so it can be pasted
//! into an env file without quoting.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::token;
use crate::error::{Error, Result, TokenError};

/// Lower bound below which `secret` refuses to generate.
const MIN_SECRET_BYTES: usize = 16;

/// Upper bound; anything longer only bloats the env file.
const MAX_SECRET_BYTES: usize = 1024;

/// Print a fresh random secret.
pub fn execute(bytes: usize) -> Result<()> {
    output::value(generate(bytes)?.as_str());
    Ok(())
}

/// Generate `bytes` random bytes, base64url-encoded.
pub fn generate(bytes: usize) -> Result<Zeroizing<String>> {
    if !(MIN_SECRET_BYTES..=MAX_SECRET_BYTES).contains(&bytes) {
        return Err(Error::InvalidInput(format!(
            "--bytes must be between {} and {}",
            MIN_SECRET_BYTES, MAX_SECRET_BYTES
        )));
    }

    let mut raw = Zeroizing::new(vec![0u8; bytes]);
    OsRng
        .try_fill_bytes(&mut raw)
        .map_err(|e| TokenError::Encryption(format!("rng failure: {}", e)))?;

    Ok(Zeroizing::new(token::encode(&raw)))
}
