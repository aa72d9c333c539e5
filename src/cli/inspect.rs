//! Inspect command.
//!
//! Reports framing only; no secret is needed.

use crate::cli::output;
use crate::core::token;
use crate::error::{Result, TokenError};

/// Print the layout of a token.
pub fn execute(token: &str, json: bool) -> Result<()> {
    let layout = token::inspect(token)?;

    if json {
        let text = serde_json::to_string(&layout).map_err(TokenError::from)?;
        output::value(text);
        return Ok(());
    }

    output::header("Token");
    output::kv("nonce", format!("{} bytes", layout.nonce_len));
    output::kv("tag", format!("{} bytes", layout.tag_len));
    output::kv("ciphertext", format!("{} bytes", layout.ciphertext_len));
    output::kv("total", format!("{} bytes", layout.total_len()));
    Ok(())
}
