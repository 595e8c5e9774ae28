use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_report_missing_final_machine() {
    let mut cmd = Command::cargo_bin("aoc2023-day20-part2").unwrap();
    cmd.arg("tests/example.txt");

    cmd.assert()
        .success()
        .stderr(str::contains("rx never receives a low pulse"));
}
