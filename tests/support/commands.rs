//! Command helper methods for Test.

use super::{Test, SECRET_ENV};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a linkseal command with the test environment applied.
    ///
    /// Inherited `NEXT_URL_TOKEN_SECRET`, `LINKSEAL_LOG` and
    /// `LINKSEAL_CONFIG` are cleared so the host cannot leak in.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("linkseal").expect("failed to find linkseal binary");
        cmd.env_remove(SECRET_ENV);
        cmd.env_remove("LINKSEAL_LOG");
        cmd.env_remove("LINKSEAL_CONFIG");
        cmd.env("NO_COLOR", "1");
        if let Some(secret) = &self.secret {
            cmd.env(SECRET_ENV, secret);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `linkseal encrypt`.
    pub fn encrypt(&self, payload: &str) -> Output {
        self.cmd()
            .args(["encrypt", payload])
            .output()
            .expect("failed to run linkseal encrypt")
    }

    /// Shortcut for `linkseal encrypt --json`.
    pub fn encrypt_json(&self, payload: &str) -> Output {
        self.cmd()
            .args(["encrypt", "--json", payload])
            .output()
            .expect("failed to run linkseal encrypt")
    }

    /// Shortcut for `linkseal decrypt`.
    pub fn decrypt(&self, token: &str) -> Output {
        self.cmd()
            .args(["decrypt", token])
            .output()
            .expect("failed to run linkseal decrypt")
    }

    /// Encrypt then return the token text, panicking on failure.
    pub fn mint(&self, payload: &str) -> String {
        let output = self.encrypt(payload);
        super::assert_success(&output);
        super::stdout(&output).trim_end().to_string()
    }
}
