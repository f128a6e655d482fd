use assert_cmd::Command;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("not a url")]
#[case("example.com/repo")]
#[case("ftp://example.com/repo")]
#[case("https://")]
fn rejects_malformed_repository_urls(#[case] url: &str) {
    let mut sut = Command::cargo_bin("gitdump").unwrap();

    sut.arg("ls").arg(url);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository URL"));
}

#[test]
fn dump_requires_a_url_and_a_target_directory() {
    let mut sut = Command::cargo_bin("gitdump").unwrap();

    sut.arg("dump").arg("https://example.com/repo");

    sut.assert().failure().stderr(predicate::str::contains("TARGET"));
}

#[test]
fn help_lists_both_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gitdump")?;

    sut.arg("--help");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("ls"))
        .stdout(predicate::str::contains("dump"));

    Ok(())
}
