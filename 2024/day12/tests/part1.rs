use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day12-part1").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains(" 1930."));
}

#[test]
fn part1_output_right_answer_for_small_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day12-part1").unwrap();
    cmd.arg("tests/example_small.txt");

    cmd.assert().success().stdout(str::contains(" 140."));
}
