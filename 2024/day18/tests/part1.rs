use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day18-part1").unwrap();
    cmd.arg("tests/example.txt").arg("--size").arg("7").arg("--bytes").arg("12");

    cmd.assert().success().stdout(str::contains("exit is 22."));
}
