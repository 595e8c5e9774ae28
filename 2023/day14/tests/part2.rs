use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day14-part2").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("spin cycles is 64."));
}
