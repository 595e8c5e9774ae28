use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day14-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--width").arg("11").arg("--height").arg("7");

    cmd.assert().success().stdout(str::contains("quadrants) is 12."));
}
