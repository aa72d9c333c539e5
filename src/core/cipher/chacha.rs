//! ChaCha20-Poly1305 backend.

use chacha20poly1305::aead::KeyInit;
use chacha20poly1305::{ChaCha20Poly1305, Key};
use tracing::trace;

use super::{open_detached, seal_detached, Cipher};
use crate::core::constants::{NONCE_LEN, TAG_LEN};
use crate::core::secret::Key as DerivedKey;
use crate::error::Result;

/// ChaCha20-Poly1305 (RFC 8439).
#[derive(Clone)]
pub struct ChaChaPoly {
    aead: ChaCha20Poly1305,
}

impl ChaChaPoly {
    pub fn new(key: &DerivedKey) -> Self {
        Self {
            aead: ChaCha20Poly1305::new(Key::from_slice(key.as_bytes())),
        }
    }
}

impl Cipher for ChaChaPoly {
    fn name(&self) -> &'static str {
        "chacha20-poly1305"
    }

    fn seal(&self, nonce: &[u8; NONCE_LEN], buffer: &mut [u8]) -> Result<[u8; TAG_LEN]> {
        trace!(len = buffer.len(), "chacha20-poly1305 seal");
        seal_detached(&self.aead, nonce, buffer)
    }

    fn open(
        &self,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<()> {
        trace!(len = buffer.len(), "chacha20-poly1305 open");
        open_detached(&self.aead, nonce, buffer, tag)
    }
}
