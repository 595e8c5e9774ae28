use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day20-part2").unwrap();
    cmd.arg("tests/example.txt").arg("--threshold").arg("50");

    cmd.assert().success().stdout(str::contains("There are 285 cheat(s)"));
}

#[test]
fn part2_output_right_answer_for_example_with_high_threshold() {
    let mut cmd = Command::cargo_bin("aoc2024-day20-part2").unwrap();
    cmd.arg("tests/example.txt").arg("--threshold").arg("76");

    cmd.assert().success().stdout(str::contains("There are 3 cheat(s)"));
}
