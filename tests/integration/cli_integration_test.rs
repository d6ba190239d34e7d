use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "foo\nbar\nfoobar\n";

fn mpgrep() -> Command {
    Command::cargo_bin("mpgrep").unwrap()
}

fn sample_file(dir: &TempDir) -> String {
    let path = dir.path().join("sample.txt");
    fs::write(&path, SAMPLE).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn default_mode_prints_matching_lines() {
    let dir = TempDir::new().unwrap();
    mpgrep()
        .arg("foo")
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout("foo\nfoobar\n");
}

#[test]
fn count_mode_prints_the_count() {
    let dir = TempDir::new().unwrap();
    mpgrep()
        .args(["-c", "foo"])
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn inverted_count_prints_the_complement() {
    let dir = TempDir::new().unwrap();
    mpgrep()
        .args(["-v", "-c", "foo"])
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn inverted_count_of_an_empty_file_is_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    mpgrep()
        .args(["-v", "-c", "foo"])
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn multiple_patterns_select_lines_matching_any() {
    let dir = TempDir::new().unwrap();
    mpgrep()
        .args(["-e", "foo", "-e", "bar"])
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout(SAMPLE);
}

#[test]
fn only_matching_emits_each_occurrence_on_its_own_line() {
    mpgrep()
        .args(["-o", "o"])
        .write_stdin("foobar\n")
        .assert()
        .success()
        .stdout("o\no\n");
}

#[test]
fn missing_file_reports_a_diagnostic_and_fails() {
    mpgrep()
        .arg("foo")
        .arg("no/such/file.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn suppressed_diagnostic_still_fails() {
    mpgrep()
        .args(["-s", "foo"])
        .arg("no/such/file.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn stdin_is_the_implicit_stream() {
    mpgrep()
        .arg("foo")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("foo\nfoobar\n");
}

#[test]
fn line_numbers_are_one_based_over_all_lines() {
    let dir = TempDir::new().unwrap();
    mpgrep()
        .args(["-n", "foo"])
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout("1:foo\n3:foobar\n");
}

#[test]
fn count_overrides_line_numbers() {
    let dir = TempDir::new().unwrap();
    mpgrep()
        .args(["-n", "-c", "foo"])
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn multiple_files_get_filename_prefixes() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "foo\n").unwrap();
    fs::write(&b, "foo too\n").unwrap();
    let expected = format!("{}:foo\n{}:foo too\n", a.display(), b.display());
    mpgrep()
        .arg("foo")
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn no_filename_flag_suppresses_prefixes() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "foo\n").unwrap();
    fs::write(&b, "foo too\n").unwrap();
    mpgrep()
        .args(["-h", "foo"])
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout("foo\nfoo too\n");
}

#[test]
fn files_with_matches_lists_only_matching_files() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "foo\n").unwrap();
    fs::write(&b, "nothing here\n").unwrap();
    let expected = format!("{}\n", a.display());
    mpgrep()
        .args(["-l", "foo"])
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn files_with_matches_combined_with_count() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "foo\n").unwrap();
    fs::write(&b, "nothing here\n").unwrap();
    let expected = format!("{}:1\n{}:0\n", a.display(), b.display());
    mpgrep()
        .args(["-l", "-c", "foo"])
        .args([a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn patterns_can_come_from_a_file() {
    let dir = TempDir::new().unwrap();
    let pattern_file = dir.path().join("patterns.txt");
    fs::write(&pattern_file, "foo\nbar\n").unwrap();
    mpgrep()
        .args(["-f", pattern_file.to_str().unwrap()])
        .arg(sample_file(&dir))
        .assert()
        .success()
        .stdout(SAMPLE);
}

#[test]
fn missing_pattern_file_is_fatal() {
    mpgrep()
        .args(["-f", "no/such/patterns.txt"])
        .write_stdin("foo\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn explicit_pattern_treats_positionals_as_filenames() {
    mpgrep()
        .args(["-e", "foo", "nonexistent-positional"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn no_pattern_at_all_prints_usage_and_fails() {
    mpgrep()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage:"));
}

#[test]
fn single_bad_pattern_is_a_pattern_error() {
    mpgrep()
        .arg("[")
        .write_stdin("anything\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("pattern error"));
}

#[test]
fn bad_pattern_among_several_is_dropped_silently() {
    mpgrep()
        .args(["-e", "[", "-e", "foo"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("foo\nfoobar\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn ignore_case_matches_across_cases() {
    mpgrep()
        .args(["-i", "FOO"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("foo\nfoobar\n");
}

#[test]
fn unterminated_final_line_gains_a_terminator() {
    mpgrep()
        .arg("bar")
        .write_stdin("foo\nbar")
        .assert()
        .success()
        .stdout("bar\n");
}
