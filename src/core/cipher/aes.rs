//! AES-256-GCM backend.

use aes_gcm::aead::KeyInit;
use aes_gcm::{Aes256Gcm, Key};
use tracing::trace;

use super::{open_detached, seal_detached, Cipher};
use crate::core::constants::{NONCE_LEN, TAG_LEN};
use crate::core::secret::Key as DerivedKey;
use crate::error::Result;

/// AES-256-GCM with a 96-bit nonce and 128-bit tag.
#[derive(Clone)]
pub struct AesGcm {
    aead: Aes256Gcm,
}

impl AesGcm {
    pub fn new(key: &DerivedKey) -> Self {
        Self {
            aead: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes())),
        }
    }
}

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn seal(&self, nonce: &[u8; NONCE_LEN], buffer: &mut [u8]) -> Result<[u8; TAG_LEN]> {
        trace!(len = buffer.len(), "aes-gcm seal");
        seal_detached(&self.aead, nonce, buffer)
    }

    fn open(
        &self,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<()> {
        trace!(len = buffer.len(), "aes-gcm open");
        open_detached(&self.aead, nonce, buffer, tag)
    }
}
