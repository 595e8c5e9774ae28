use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_example_in_6_steps() {
    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.arg("tests/example.txt").arg("--steps").arg("6");

    cmd.assert().success().stdout(str::contains("reach 16 garden plots"));
}

#[test]
fn part2_output_right_answer_for_example_in_10_steps() {
    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.arg("tests/example.txt").arg("--steps").arg("10");

    cmd.assert().success().stdout(str::contains("reach 50 garden plots"));
}

#[test]
fn part2_extrapolate_far_walks_on_clear_centre_garden() {
    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.arg("tests/clear_centre.txt").arg("--steps").arg("49");

    cmd.assert().success().stdout(str::contains("reach 2077 garden plots"));

    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.arg("tests/clear_centre.txt").arg("--steps").arg("93");

    cmd.assert().success().stdout(str::contains("reach 7357 garden plots"));
}

#[test]
fn part2_extrapolate_long_walks_on_clear_centre_garden() {
    let mut cmd = Command::cargo_bin("aoc2023-day21-part2").unwrap();
    cmd.arg("tests/clear_centre.txt").arg("--steps").arg("500");

    cmd.assert().success().stdout(str::contains("reach 209414 garden plots"));
}
