use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day1-part1").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("values is 142."));
}

#[test]
fn part1_fails_on_line_without_digit() {
    let mut cmd = Command::cargo_bin("aoc2023-day1-part1").unwrap();
    cmd.arg("tests/example2.txt");

    cmd.assert().failure();
}
