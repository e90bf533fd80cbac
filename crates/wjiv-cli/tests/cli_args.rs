use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("wjiv").unwrap()
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("lines"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn parse_subcommand_help() {
    cmd()
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--id-field"))
        .stdout(predicate::str::contains("--footer-skip"));
}

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn parse_requires_file_argument() {
    cmd()
        .arg("parse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILE"));
}

#[test]
fn invalid_format_is_rejected() {
    cmd()
        .args(["parse", "report.txt", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}
