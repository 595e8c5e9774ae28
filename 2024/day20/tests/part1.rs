use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day20-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--threshold").arg("20");

    cmd.assert().success().stdout(str::contains("There are 5 cheat(s)"));
}

#[test]
fn part1_output_right_answer_for_example_with_high_threshold() {
    let mut cmd = Command::cargo_bin("aoc2024-day20-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--threshold").arg("64");

    cmd.assert().success().stdout(str::contains("There are 1 cheat(s)"));
}
