use assert_cmd::Command;
use predicates::prelude::predicate::str;

fn aoc_in(root: &str) -> Command {
    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.env_remove("SESSION_TOKEN").arg("--root").arg(root);
    cmd
}

fn aoc() -> Command {
    aoc_in("..")
}

#[test]
fn solve_output_answer_for_example() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2024", "--day", "1", "--part", "1", "--example"]);

    cmd.assert().success().stdout(str::diff("11\n"));
}

#[test]
fn solve_output_answer_for_given_input() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2023", "--day", "1", "--part", "2"])
        .arg("--input")
        .arg("../2023/day1/tests/example2.txt");

    cmd.assert().success().stdout(str::diff("281\n"));
}

#[test]
fn solve_use_default_parameters_of_real_input() {
    let mut cmd = aoc();
    cmd.args(["solve", "-y", "2023", "-d", "11", "-p", "2", "--example"]);

    cmd.assert().success().stdout(str::diff("82000210\n"));
}

#[test]
fn solve_fail_without_downloaded_input() {
    let mut cmd = aoc_in("tests");
    cmd.args(["solve", "--year", "2024", "--day", "1", "--part", "1"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("doesn't exist, download it first"));
}

#[test]
fn solve_fail_for_day_25_part_2() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2024", "--day", "25", "--part", "2", "--example"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("has no second part"));
}

#[test]
fn solve_fail_for_unsolved_year() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2015", "--day", "1", "--part", "1"])
        .arg("--input")
        .arg("../2024/day1/tests/example.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("There is no solver for 2015 day 1 yet."));
}

#[test]
fn reject_invalid_day() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2024", "--day", "26", "--part", "1"]);

    cmd.assert().failure().stderr(str::contains("Invalid day(26)"));
}

#[test]
fn reject_invalid_year() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2014", "--day", "1", "--part", "1"]);

    cmd.assert().failure().stderr(str::contains("Invalid year(2014)"));
}

#[test]
fn reject_invalid_part() {
    let mut cmd = aoc();
    cmd.args(["solve", "--year", "2024", "--day", "1", "--part", "3"]);

    cmd.assert().failure().stderr(str::contains("Invalid part(3)"));
}

#[test]
fn download_need_session_token() {
    let mut cmd = aoc();
    cmd.args(["download", "--year", "2024", "--day", "1"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("No session token"));
}

#[test]
fn interactive_mode_exit_on_request() {
    let mut cmd = aoc();
    cmd.write_stdin("5\n");

    cmd.assert()
        .success()
        .stdout(str::contains("What would you like to do?"));
}

#[test]
fn interactive_mode_exit_on_end_of_input() {
    let mut cmd = aoc();
    cmd.write_stdin("");

    cmd.assert().success();
}
