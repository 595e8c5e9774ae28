use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day11-part1").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("changes to 55312."));
}

#[test]
fn part1_output_right_answer_after_six_blinks() {
    let mut cmd = Command::cargo_bin("aoc2024-day11-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--blink-count").arg("6");

    cmd.assert().success().stdout(str::contains("changes to 22."));
}
