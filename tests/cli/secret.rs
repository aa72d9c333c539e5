//! `linkseal secret` and `linkseal completions` tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_secret_generates_usable_value() {
    let t = Test::without_secret();
    let output = t.cmd().arg("secret").output().unwrap();
    assert_success(&output);

    let secret = stdout(&output).trim_end().to_string();
    assert_eq!(secret.len(), 43);
    assert_url_safe(&secret);

    // The generated value works as a secret.
    let t = Test::with_secret(&secret);
    let token = t.mint("role=provider");
    t.cmd()
        .args(["decrypt", token.as_str()])
        .assert()
        .success()
        .stdout("role=provider\n");
}

#[test]
fn test_secret_bytes_bounds() {
    let t = Test::without_secret();
    t.cmd()
        .args(["secret", "--bytes", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bytes"));
    t.cmd().args(["secret", "--bytes", "64"]).assert().success();
}

#[test]
fn test_completions_bash() {
    let t = Test::without_secret();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linkseal"));
}
