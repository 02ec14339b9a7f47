//! CLI integration tests for hachi64
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn hachi64() -> Command {
    Command::cargo_bin("hachi64").unwrap()
}

#[test]
fn test_help() {
    hachi64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode and decode binary data"));
}

#[test]
fn test_version() {
    hachi64()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hachi64"));
}

#[test]
fn test_alphabet_listing() {
    hachi64()
        .arg("--alphabet")
        .assert()
        .success()
        .stdout(predicate::str::contains("哈蛤呵吉"));
}

#[test]
fn test_encode() {
    hachi64()
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("西阿南呀\n");
}

#[test]
fn test_encode_with_padding() {
    hachi64()
        .write_stdin("a")
        .assert()
        .success()
        .stdout("西律==\n");
}

#[test]
fn test_encode_no_padding() {
    hachi64()
        .arg("--no-padding")
        .write_stdin("a")
        .assert()
        .success()
        .stdout("西律\n");
}

#[test]
fn test_decode() {
    hachi64()
        .arg("--decode")
        .write_stdin("西阿南呀")
        .assert()
        .success()
        .stdout("abc");
}

#[test]
fn test_roundtrip() {
    let encoded = hachi64()
        .write_stdin("test data 123")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    hachi64()
        .arg("--decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("test data 123");
}

#[test]
fn test_decode_invalid_input() {
    hachi64()
        .arg("--decode")
        .write_stdin("not hachi64!!!")
        .assert()
        .failure();
}

#[test]
fn test_decode_padding_rejected_without_flag() {
    hachi64()
        .args(["--decode", "--no-padding"])
        .write_stdin("西律==")
        .assert()
        .failure();
}

#[test]
fn test_file_not_found() {
    hachi64()
        .arg("/nonexistent/path/file.txt")
        .assert()
        .failure();
}
