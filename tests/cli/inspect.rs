//! `linkseal inspect` tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_inspect_without_secret() {
    let token = codec().encrypt("abc").unwrap();
    let t = Test::without_secret();

    t.cmd()
        .args(["inspect", token.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ciphertext"))
        .stdout(predicate::str::contains("3 bytes"))
        .stdout(predicate::str::contains("31 bytes"));
}

#[test]
fn test_inspect_json() {
    let token = codec().encrypt("abcd").unwrap();
    let t = Test::without_secret();

    let output = t.cmd().args(["inspect", "--json", token.as_str()]).output().unwrap();
    assert_success(&output);

    let layout: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(layout["nonce_len"], 12);
    assert_eq!(layout["tag_len"], 16);
    assert_eq!(layout["ciphertext_len"], 4);
}

#[test]
fn test_inspect_short_token() {
    let t = Test::without_secret();
    t.cmd()
        .args(["inspect", "AAAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("need at least 28"));
}
