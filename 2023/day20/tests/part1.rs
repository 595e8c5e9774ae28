use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day20-part1").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("1000 times is 32000000."));
}

#[test]
fn part1_output_right_answer_for_example_with_state() {
    let mut cmd = Command::cargo_bin("aoc2023-day20-part1").unwrap();
    cmd.arg("tests/example2.txt");

    cmd.assert().success().stdout(str::contains("1000 times is 11687500."));
}
