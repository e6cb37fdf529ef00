//! CLI integration tests: the binary as a user would drive it.
#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn base_prism() -> Command {
    Command::cargo_bin("base-prism").unwrap()
}

#[test]
fn test_help() {
    base_prism()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode and decode binary data"));
}

#[test]
fn test_list_schemes() {
    base_prism()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base58"))
        .stdout(predicate::str::contains("base32"))
        .stdout(predicate::str::contains("z85"));
}

#[test]
fn test_encode_decode_round_trip_via_stdin() {
    let output = base_prism()
        .args(["encode", "base58"])
        .write_stdin("hello world")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_prism()
        .args(["decode", "base58"])
        .write_stdin(output)
        .assert()
        .success()
        .stdout(predicate::eq("hello world"));
}

#[test]
fn test_encode_known_vector() {
    base_prism()
        .args(["encode", "base16upper"])
        .write_stdin(vec![0xABu8, 0xCD])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCD"));
}

#[test]
fn test_unknown_scheme_fails() {
    base_prism()
        .args(["encode", "base99"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scheme"));
}

#[test]
fn test_decode_invalid_input_fails() {
    base_prism()
        .args(["decode", "base58"])
        .write_stdin("0OIl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn test_multibase_round_trip() {
    base_prism()
        .args(["multibase", "base16"])
        .write_stdin("yes mani !")
        .assert()
        .success()
        .stdout(predicate::str::contains("f796573206d616e692021"));

    base_prism()
        .arg("unmultibase")
        .write_stdin("f796573206d616e692021")
        .assert()
        .success()
        .stdout(predicate::eq("yes mani !"))
        .stderr(predicate::str::contains("base16"));
}

#[test]
fn test_custom_alphabet_file() {
    let dir = std::env::temp_dir().join("base-prism-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("alphabets.toml");
    std::fs::write(&path, "[alphabets.dna]\nsymbols = \"ACGT\"\nmode = \"bit_packing\"\n").unwrap();

    base_prism()
        .args(["--alphabets", path.to_str().unwrap(), "encode", "dna"])
        .write_stdin(vec![0b00011011u8])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACGT"));
}
