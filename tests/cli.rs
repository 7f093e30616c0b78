use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("shared-utils").unwrap()
}

#[test]
fn test_basename() {
    cmd()
        .args(["basename", "/path/to/foo.txt"])
        .assert()
        .success()
        .stdout("foo.txt\n");
}

#[test]
fn test_basename_trailing_delimiter() {
    cmd()
        .args(["basename", "/path/to/"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_basename_extension() {
    cmd()
        .args(["basename", "/path/to/foo.txt", "--delimiter", "."])
        .assert()
        .success()
        .stdout("txt\n");
}

#[test]
fn test_truncate() {
    cmd()
        .args(["truncate", "abc", "2"])
        .assert()
        .success()
        .stdout("a…\n");
    cmd()
        .args(["truncate", "def", "0"])
        .assert()
        .success()
        .stdout("…\n");
    cmd()
        .args(["truncate", "abc", "3"])
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_map_swap_from_stdin() {
    cmd()
        .args(["map", "--swap", "--format", "json"])
        .write_stdin(r#"{"foo": 123, "bar": 456}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""123": "foo""#))
        .stdout(predicate::str::contains(r#""456": "bar""#));
}

#[test]
fn test_map_wrap_table() {
    cmd()
        .args(["map", "--wrap", "value"])
        .write_stdin(r#"{"foo": 123}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains(r#"{"value":123}"#));
}

#[test]
fn test_map_requires_transform() {
    cmd()
        .arg("map")
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --swap or --wrap"));
}

#[test]
fn test_map_rejects_non_object() {
    cmd()
        .args(["map", "--swap"])
        .write_stdin("[1, 2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn test_contains_stdin_found() {
    cmd()
        .args(["contains", "beta", "--format", "json"])
        .write_stdin("alpha\nbeta\ngamma\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\": true"))
        .stdout(predicate::str::contains("\"pulled\": 2"));
}

#[test]
fn test_contains_stdin_missing() {
    cmd()
        .args(["contains", "delta"])
        .write_stdin("alpha\nbeta\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_contains_regex_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "error: one\nwarning: two\nerror: three").unwrap();

    cmd()
        .args(["contains", "^warn", "--regex", "--format", "json", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pulled\": 2"));
}

#[test]
fn test_contains_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src").join("lib.rs"), "").unwrap();

    cmd()
        .args(["contains", "lib.rs", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn test_contains_file_and_dir_conflict() {
    cmd()
        .args(["contains", "x", "--file", "a", "--dir", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file cannot be used with --dir"));
}

#[test]
fn test_verbose_writes_to_stderr() {
    cmd()
        .args(["contains", "a", "-v"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("stopped after 1 item(s)"));
}
