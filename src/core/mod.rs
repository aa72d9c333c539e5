//! Core library components.
//!
//! Key derivation, AEAD backends, token framing and the codec that ties
//! them together. Nothing in here performs I/O beyond reading the secret
//! from the environment and an optional config file.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod payload;
pub mod secret;
pub mod token;
pub mod types;
