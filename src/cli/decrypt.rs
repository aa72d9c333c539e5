//! Decrypt command.

use crate::cli::output;
use crate::core::codec::TokenCodec;
use crate::core::payload::Payload;
use crate::error::Result;

/// Open a token and print its payload to stdout.
///
/// Records print as pretty JSON, raw strings as-is.
pub fn execute(codec: &TokenCodec, token: &str, raw: bool) -> Result<()> {
    if raw {
        output::value(codec.decrypt_raw(token)?);
        return Ok(());
    }

    match codec.decrypt(token)? {
        Payload::Record(record) => {
            let pretty = serde_json::to_string_pretty(&record)
                .map_err(crate::error::TokenError::from)?;
            output::value(pretty);
        }
        Payload::Raw(text) => output::value(text),
    }
    Ok(())
}
