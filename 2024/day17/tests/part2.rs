use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2024-day17-part2").unwrap();
    cmd.arg("tests/example2.txt");

    cmd.assert().success().stdout(str::contains("itself is 117440."));
}
