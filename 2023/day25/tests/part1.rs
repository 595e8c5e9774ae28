use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day25-part1").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("wire(s) is 54."));
}

#[test]
fn part1_output_no_answer_for_too_few_wires() {
    let mut cmd = Command::cargo_bin("aoc2023-day25-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--wires").arg("2");

    cmd.assert()
        .success()
        .stderr(str::contains("Can't split the components"));
}
