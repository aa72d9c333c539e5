//! Cipher backend selection and dispatch.

use tracing::debug;

use super::{AesGcm, ChaChaPoly, Cipher, CipherKind};
use crate::core::constants::{NONCE_LEN, TAG_LEN};
use crate::core::secret::Key;
use crate::error::Result;

/// Cipher backend chosen by configuration.
#[derive(Clone)]
pub enum CipherBackend {
    /// AES-256-GCM (default)
    AesGcm(AesGcm),

    /// ChaCha20-Poly1305
    ChaCha(ChaChaPoly),
}

impl CipherBackend {
    /// Key a backend of the requested kind.
    pub fn new(kind: CipherKind, key: &Key) -> Self {
        debug!(cipher = %kind, "creating cipher backend");
        match kind {
            CipherKind::Aes256Gcm => Self::AesGcm(AesGcm::new(key)),
            CipherKind::ChaCha20Poly1305 => Self::ChaCha(ChaChaPoly::new(key)),
        }
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Self::AesGcm(_) => CipherKind::Aes256Gcm,
            Self::ChaCha(_) => CipherKind::ChaCha20Poly1305,
        }
    }

    fn inner(&self) -> &dyn Cipher {
        match self {
            Self::AesGcm(c) => c as &dyn Cipher,
            Self::ChaCha(c) => c as &dyn Cipher,
        }
    }
}

impl Cipher for CipherBackend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn seal(&self, nonce: &[u8; NONCE_LEN], buffer: &mut [u8]) -> Result<[u8; TAG_LEN]> {
        self.inner().seal(nonce, buffer)
    }

    fn open(
        &self,
        nonce: &[u8; NONCE_LEN],
        buffer: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<()> {
        self.inner().open(nonce, buffer, tag)
    }
}

impl std::fmt::Debug for CipherBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CipherBackend").field(&self.name()).finish()
    }
}
