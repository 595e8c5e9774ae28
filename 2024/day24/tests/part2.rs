use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_for_swapped_adder() {
    let mut cmd = Command::cargo_bin("aoc2024-day24-part2").unwrap();
    cmd.arg("tests/swapped_adder.txt").arg("--pairs").arg("2");

    cmd.assert().success().stdout(str::contains("joined with commas are add,cbb,sdd,z01."));
}
