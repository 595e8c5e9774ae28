use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day12-part2").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains(" 1206."));
}

#[test]
fn part2_output_right_answer_for_small_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day12-part2").unwrap();
    cmd.arg("tests/example_small.txt");

    cmd.assert().success().stdout(str::contains(" 80."));
}
