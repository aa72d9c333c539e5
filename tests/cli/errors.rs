//! Failure modes and exit codes.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_secret_encrypt() {
    let t = Test::without_secret();
    let output = t.encrypt("role=provider");
    assert_failure(&output);
    assert_stderr_contains(&output, "NEXT_URL_TOKEN_SECRET");
    assert_stderr_contains(&output, "linkseal secret");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_missing_secret_decrypt() {
    let token = codec().encrypt("role=provider").unwrap();
    let t = Test::without_secret();
    let output = t.decrypt(&token);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing secret");
}

#[test]
fn test_empty_secret_is_missing() {
    let t = Test::with_secret("");
    let output = t.encrypt("x");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing secret");
}

#[test]
fn test_wrong_secret() {
    let token = Test::with_secret(OTHER_SECRET).mint("role=provider");
    let t = Test::new();
    let output = t.decrypt(&token);
    assert_failure(&output);
    assert_stderr_contains(&output, "tag mismatch");
}

#[test]
fn test_malformed_token() {
    let t = Test::new();
    t.cmd()
        .args(["decrypt", "AAAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid token"));
}

#[test]
fn test_unknown_cipher_flag() {
    let t = Test::new();
    t.cmd()
        .args(["--cipher", "rot13", "encrypt", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cipher"));
}

#[test]
fn test_broken_config_file() {
    let t = Test::new();
    t.write_config("[token\n");
    t.cmd()
        .args(["encrypt", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_unknown_cipher_in_config_file() {
    let t = Test::new();
    t.write_config("[token]\ncipher = \"rot13\"\n");
    t.cmd()
        .args(["encrypt", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cipher: rot13"))
        .stderr(predicate::str::contains("use --cipher"));
}

#[test]
fn test_explicit_missing_config_path() {
    let t = Test::new();
    t.cmd()
        .args(["--config", "nope.toml", "encrypt", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["--verbose", "encrypt", "role=provider"])
        .output()
        .unwrap();
    assert_success(&output);

    // stdout stays a bare token even with debug logging on
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert_url_safe(out.trim_end());
    assert!(stderr(&output).contains("DEBUG"));
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::new();
    let output = t.encrypt("x");
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("TRACE"));
}

#[test]
fn test_json_log_format() {
    let t = Test::new();
    let token = codec_with(OTHER_SECRET).encrypt("x").unwrap();
    let output = t
        .cmd()
        .env("LINKSEAL_LOG", "linkseal=debug")
        .args(["--log-format", "json", "decrypt", token.as_str()])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "\"kind\":\"authentication\"");
}
