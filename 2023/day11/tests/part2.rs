use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_example_grow_10_times() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part2").unwrap();
    cmd.arg("tests/example.txt").arg("--factor").arg("10");

    cmd.assert().success().stdout(str::contains("galaxies is 1030."));
}

#[test]
fn part2_output_right_answer_for_example_grow_100_times() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part2").unwrap();
    cmd.arg("tests/example.txt").arg("--factor").arg("100");

    cmd.assert().success().stdout(str::contains("galaxies is 8410."));
}

#[test]
fn part2_output_right_answer_for_example() {
    let mut cmd = Command::cargo_bin("aoc2023-day11-part2").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("galaxies is 82000210."));
}
