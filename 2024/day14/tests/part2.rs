use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_first_second_without_overlap() {
    let mut cmd = Command::cargo_bin("aoc2024-day14-part2").unwrap();
    cmd.arg("tests/overlap.txt").arg("--width").arg("3").arg("--height").arg("3");

    cmd.assert().success().stdout(str::contains("Easter egg is 1."));
}
