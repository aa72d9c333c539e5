//! `linkseal encrypt` tests.

use crate::support::*;

#[test]
fn test_encrypt_prints_single_url_safe_line() {
    let t = Test::new();
    let output = t.encrypt("role=provider");
    assert_success(&output);

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert_url_safe(out.trim_end());
}

#[test]
fn test_encrypt_token_opens_with_library() {
    let t = Test::new();
    let token = t.mint("role=provider");
    assert_eq!(
        codec().decrypt(&token).unwrap().as_raw(),
        Some("role=provider")
    );
}

#[test]
fn test_encrypt_json_record() {
    let t = Test::new();
    let output = t.encrypt_json(r#"{"role":"user"}"#);
    assert_success(&output);

    let payload = codec().decrypt(stdout(&output).trim_end()).unwrap();
    assert_eq!(payload.get_str("role"), Some("user"));
}

#[test]
fn test_encrypt_json_rejects_non_object() {
    let t = Test::new();
    let output = t.encrypt_json("[1,2,3]");
    assert_failure(&output);
    assert_stderr_contains(&output, "JSON object");
}

#[test]
fn test_encrypt_from_stdin() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["encrypt", "-"])
        .write_stdin("role=provider\n")
        .output()
        .unwrap();
    assert_success(&output);

    let token = stdout(&output);
    assert_eq!(
        codec().decrypt_raw(token.trim_end()).unwrap(),
        "role=provider"
    );
}

#[test]
fn test_encrypt_twice_differs() {
    let t = Test::new();
    assert_ne!(t.mint("same"), t.mint("same"));
}
