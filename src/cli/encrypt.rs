//! Encrypt command.

use serde_json::Value;
use tracing::debug;

use crate::cli::output;
use crate::core::codec::TokenCodec;
use crate::core::payload::Payload;
use crate::error::{Error, Result};

/// Mint a token and print it to stdout.
///
/// With `json`, the payload must be a JSON object and is carried as a
/// record; otherwise it is carried verbatim.
pub fn execute(codec: &TokenCodec, payload: &str, json: bool) -> Result<()> {
    let payload = if json {
        parse_record(payload)?
    } else {
        Payload::Raw(payload.to_string())
    };

    debug!(record = payload.is_record(), "encrypting payload");
    let token = codec.encrypt(payload)?;
    output::value(token);
    Ok(())
}

fn parse_record(text: &str) -> Result<Payload> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(record)) => Ok(Payload::Record(record)),
        Ok(_) => Err(Error::InvalidInput(
            "--json payload must be a JSON object".to_string(),
        )),
        Err(e) => Err(Error::InvalidInput(format!("invalid JSON: {}", e))),
    }
}
