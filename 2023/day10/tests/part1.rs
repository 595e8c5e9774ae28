use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day10-part1").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("It takes 8 steps"));
}
