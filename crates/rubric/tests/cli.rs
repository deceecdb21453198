use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn rubric() -> Command {
    let mut cmd = Command::cargo_bin("rubric").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn all_candidates_match() {
    rubric()
        .args(["--answer", r#"["Number", "11/10"]"#, "1.1", "1.10", "11/10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 1.10"))
        .stdout(predicate::str::contains("All 3 candidates matched"));
}

#[test]
fn mismatch_fails() {
    rubric()
        .args(["--answer", r#"["Number", "11/10"]"#, "1.1", "1.15", "21/20"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓ 1.1"))
        .stdout(predicate::str::contains("✗ 1.15"))
        .stdout(predicate::str::contains("✗ 21/20"))
        .stdout(predicate::str::contains("Summary: 1 matched, 2 not matched"));
}

#[test]
fn negative_candidates_are_positional() {
    rubric()
        .args(["--answer", r#"["Number", "-1/3"]"#, "-0.33"])
        .assert()
        .success();
}

#[test]
fn range_with_per_call_option() {
    let answer = r#"["Number", ["1/2", "1"]]"#;
    rubric()
        .args(["--answer", answer, "0.5", "1"])
        .assert()
        .success();
    rubric()
        .args(["--answer", answer, "-o", "rangemode=inclusive_low", "0.5", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓ 0.5"))
        .stdout(predicate::str::contains("✗ 1"));
}

#[test]
fn pattern_answer() {
    rubric()
        .args([
            "--answer",
            r#"["String", "test*", "pattern"]"#,
            "teSt..** adfkjaldkfja",
            "adfaf testadfadf",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓ teSt..** adfkjaldkfja"))
        .stdout(predicate::str::contains("✗ adfaf testadfadf"));
}

#[test]
fn json_candidates_for_lists() {
    let answer = r#"["ListOfAnswers", [["String", "moscow"], ["String", "paris"], ["String", "ottawa"]], "include"]"#;
    rubric()
        .args(["--answer", answer, "--json", r#"["paris"]"#])
        .assert()
        .success();
    rubric()
        .args(["--answer", answer, "--json", r#"["paris", "beijing"]"#])
        .assert()
        .failure();
    rubric()
        .args(["--answer", answer, "--json", "-o", "minimum=2", r#"["paris"]"#])
        .assert()
        .failure();
}

#[test]
fn answer_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"["MapOfAnswers", {{"a": ["Number", "2/3"], "b": ["Number", "1/3"]}}]"#
    )
    .unwrap();

    rubric()
        .arg("--answer-file")
        .arg(file.path())
        .args(["--json", r#"{"a": "2/3", "b": "0.33333"}"#])
        .assert()
        .success();
    rubric()
        .arg("--answer-file")
        .arg(file.path())
        .args(["--json", r#"{"a": "2/3"}"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"));
}

#[test]
fn type_mismatch_is_reported() {
    rubric()
        .args(["--answer", r#"["MapOfAnswers", {"a": ["Number", "1"]}]"#, "--json", r#"["1"]"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("! [\"1\"]"))
        .stdout(predicate::str::contains("type mismatch: expected object, got array"))
        .stdout(predicate::str::contains("1 errors"));
}

#[test]
fn sigfig_is_reported_as_unsupported() {
    rubric()
        .args(["--answer", r#"["Number", "3.14", "sigfig"]"#, "3.14"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not supported"));
}

#[test]
fn strict_rejects_unknown_mode() {
    let answer = r#"["String", "Paris", "fuzzy"]"#;
    rubric().args(["--answer", answer, "paris"]).assert().success();
    rubric()
        .args(["--strict", "--answer", answer, "paris"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown match mode 'fuzzy' for String"));
}

#[test]
fn invalid_answer_json() {
    rubric()
        .args(["--answer", "[\"Number\"", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse answer as JSON"));
}

#[test]
fn invalid_regex_is_a_build_error() {
    rubric()
        .args(["--answer", r#"["String", "t[e", "regex"]"#, "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn missing_answer_file() {
    rubric()
        .args(["--answer-file", "/nonexistent/answer.json", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read answer file"));
}

#[test]
fn answer_is_required() {
    rubric().arg("1").assert().failure();
}
