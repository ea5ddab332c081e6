// wordscrub/tests/integration_line_buffered.rs
//! Integration tests for the --line-buffered mode of wordscrub.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command as StdCommand, Stdio};

#[test]
fn test_line_buffered_basic_sanitization() {
    Command::new(assert_cmd::cargo_bin!("wordscrub"))
        .args(["--line-buffered", "--ban", "purist"])
        .write_stdin("one   purist\n\ttwo\nthree purist")
        .assert()
        .success()
        .stdout("one ******\n two\nthree ******");
}

#[test]
fn test_line_buffered_conflicts_with_json_stdout() {
    Command::new(assert_cmd::cargo_bin!("wordscrub"))
        .args(["--line-buffered", "--json-stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_line_buffered_emits_before_eof() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = StdCommand::new(assert_cmd::cargo_bin!("wordscrub"))
        .args(["--line-buffered", "--ban", "mockist"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().ok_or("stdin not captured")?;
    let stdout = child.stdout.take().ok_or("stdout not captured")?;
    let mut lines = BufReader::new(stdout).lines();

    // The first line must come back while stdin is still open.
    writeln!(stdin, "hello    mockist")?;
    stdin.flush()?;
    assert_eq!(lines.next().ok_or("no output")??, "hello *******");

    writeln!(stdin, "bye")?;
    drop(stdin);
    assert_eq!(lines.next().ok_or("no output")??, "bye");

    assert!(child.wait()?.success());
    Ok(())
}
