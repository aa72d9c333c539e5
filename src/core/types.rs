//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A URL-safe, unpadded base64 token (`nonce || tag || ciphertext`).
pub type Token = String;

/// A structured payload: a JSON object.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Name of an environment variable.
pub type EnvVar = String;
