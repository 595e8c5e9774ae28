use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day24-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--min").arg("7").arg("--max").arg("27");

    cmd.assert().success().stdout(str::contains("There are 2 pair(s)"));
}

#[test]
fn part1_output_no_crossing_outside_test_area() {
    let mut cmd = Command::cargo_bin("aoc2023-day24-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--min").arg("100").arg("--max").arg("200");

    cmd.assert().success().stdout(str::contains("There are 0 pair(s)"));
}
