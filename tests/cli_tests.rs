#![cfg(feature = "cli")]

use std::process::{Command, Output};

use testnummers::{is_valid_bsn, is_valid_iban};

fn testnummers(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_testnummers"))
        .args(args)
        .env_remove("TESTNUMMERS_SEED")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run testnummers binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn bsn_default_count() {
    let out = testnummers(&["bsn"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let values: Vec<_> = text.lines().skip(1).map(str::trim).collect();
    assert_eq!(values.len(), 1);
    assert!(is_valid_bsn(values[0]));
}

#[test]
fn iban_with_bank() {
    let out = testnummers(&["iban", "3", "ingb"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let values: Vec<_> = text.lines().skip(1).map(str::trim).collect();
    assert_eq!(values.len(), 3);
    for iban in values {
        assert!(iban.starts_with("NL"));
        assert_eq!(&iban[5..9], "INGB");
        assert!(is_valid_iban(iban));
    }
}

#[test]
fn unknown_bank_exits_non_zero() {
    let out = testnummers(&["iban", "2", "XXXX"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid bank code 'XXXX'"), "{err}");
}

#[test]
fn validate_without_argument_exits_non_zero() {
    let out = testnummers(&["validate-iban"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn validate_bsn_prints_verdict() {
    let out = testnummers(&["validate-bsn", "123456782"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "BSN 123456782 is VALID ✓\n");
}

#[test]
fn seeded_runs_match() {
    let a = testnummers(&["--seed", "12345", "lhn", "4"]);
    let b = testnummers(&["--seed", "12345", "lhn", "4"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn help_lists_commands() {
    let out = testnummers(&["help"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for cmd in ["bsn", "iban", "validate-bsn", "validate-iban", "loonheffingennummer"] {
        assert!(text.contains(cmd), "help is missing {cmd}");
    }
}
