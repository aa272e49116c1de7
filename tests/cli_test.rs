// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line tests for the `mcn` binary.

use assert_cmd::Command;

fn mcn() -> Command {
    Command::cargo_bin("mcn").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = mcn().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_default_output() {
    assert_eq!(
        stdout_of(&["1", "-4", "3", "-1", "2", "-3", "4", "-2"]),
        "Meridional coloring number: 2\n"
    );
}

#[test]
fn test_comma_separated_tokens() {
    assert_eq!(
        stdout_of(&["1,", "-4,", "3,", "-1,", "2,", "-3,", "4,", "-2"]),
        "Meridional coloring number: 2\n"
    );
}

#[test]
fn test_quiet() {
    assert_eq!(stdout_of(&["-q", "1", "-2", "2", "-1"]), "1\n");
    assert_eq!(stdout_of(&["--quiet", "1,", "-3,", "2,", "-1,", "3,", "-2"]), "2\n");
}

#[test]
fn test_verbose() {
    let expected = "
Knot dictionary:

    STRAND     SUBSEQUENCE                   CROSSINGS OVER
       A       (-4, 3, -1)                   (C, B)
       B       (-1, 2, -3)                   (D, C)
       C       (-3, 4, -2)                   (A, D)
       D       (-2, 1, -4)                   (B, A)

Seed strand set: {A, B}
Minimum seed sets: 6
Meridional coloring number: 2
";
    assert_eq!(
        stdout_of(&["-v", "1", "-4", "3", "-1", "2", "-3", "4", "-2"]),
        expected
    );
}

#[test]
fn test_verbose_logs_statistics() {
    let output = mcn()
        .args(["--verbose", "1", "-2", "2", "-1"])
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    let log = String::from_utf8(output).unwrap();
    assert!(log.contains("[mcn] 2 crossings, 2 strands"));
    assert!(log.contains("[mcn] fallback_searches: 1"));
}

#[test]
fn test_bad_token() {
    let output = mcn()
        .args(["1", "-1x"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let log = String::from_utf8(output).unwrap();
    assert!(log.contains("cannot parse \"-1x\" as a signed integer"));
}

#[test]
fn test_malformed_code() {
    let output = mcn()
        .args(["1", "-1", "1"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let log = String::from_utf8(output).unwrap();
    assert!(log.contains("malformed Gauss code"));
}

#[test]
fn test_missing_code() {
    mcn().arg("-q").assert().failure();
}
