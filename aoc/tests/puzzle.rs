use std::{io::Cursor, path::Path};

use aoc::{
    interactive::{self, Action, Choice},
    puzzle::{self, Part, Puzzle},
    template,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn default_year_is_latest_event() {
    assert_eq!(puzzle::default_year(date(2024, 12, 5)), 2024);
    assert_eq!(puzzle::default_year(date(2025, 3, 1)), 2024);
}

#[test]
fn default_day_only_during_event() {
    assert_eq!(puzzle::default_day(date(2024, 12, 5)), Some(5));
    assert_eq!(puzzle::default_day(date(2024, 12, 26)), None);
    assert_eq!(puzzle::default_day(date(2024, 11, 30)), None);
    assert!(puzzle::resolve_day(None, date(2024, 7, 1)).is_err());
    assert_eq!(puzzle::resolve_day(Some(3), date(2024, 7, 1)).unwrap(), 3);
}

#[test]
fn puzzle_validate_year_and_day() {
    assert!(Puzzle::new(2014, 1).is_err());
    assert!(Puzzle::new(2015, 0).is_err());
    assert!(Puzzle::new(2015, 26).is_err());
    assert!(Puzzle::new(2015, 25).is_ok());
    assert_eq!(puzzle::validate_day_or_all(0).unwrap(), 0);
    assert!(puzzle::validate_day_or_all(26).is_err());
    assert!(Part::try_from(0).is_err());
    assert_eq!(Part::try_from(2).unwrap(), Part::Two);
}

#[test]
fn puzzle_paths_in_day_folder() {
    let puzzle = Puzzle::new(2024, 7).unwrap();
    let root = Path::new("root");

    assert_eq!(puzzle.crate_name(), "aoc2024-day7");
    assert_eq!(puzzle.input_path(root), Path::new("root/2024/day7/inputs.txt"));
    assert_eq!(
        puzzle.example_path(root),
        Path::new("root/2024/day7/tests/example.txt")
    );
    assert_eq!(puzzle.readme_path(root), Path::new("root/2024/day7/README.md"));
}

#[test]
fn template_render_puzzle_names() {
    let puzzle = Puzzle::new(2023, 12).unwrap();

    assert_eq!(
        template::render("name = \"aoc{{year}}-day{{day}}\"", &puzzle),
        "name = \"aoc2023-day12\""
    );
}

#[test]
fn template_create_day_only_once() {
    let root = std::env::temp_dir().join(format!("aoc-template-test-{}", std::process::id()));
    let puzzle = Puzzle::new(2022, 3).unwrap();

    assert!(template::create_day(&root, &puzzle).unwrap());
    let cargo_toml = std::fs::read_to_string(puzzle.dir(&root).join("Cargo.toml")).unwrap();
    assert!(cargo_toml.contains("name = \"aoc2022-day3-part1\""));
    assert!(cargo_toml.contains("common.workspace = true"));
    let lib = std::fs::read_to_string(puzzle.dir(&root).join("src/lib.rs")).unwrap();
    assert!(lib.contains("common::input::read_lines"));
    assert!(puzzle.example_path(&root).is_file());
    assert!(!template::create_day(&root, &puzzle).unwrap());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn prompt_ask_part_for_solving() {
    let mut input = Cursor::new("3\n2\n7\n2\n");
    let mut output = Vec::new();
    let choice = interactive::prompt(&mut input, &mut output, date(2024, 12, 10)).unwrap();

    assert_eq!(
        choice,
        Some(Choice {
            action: Action::Solve,
            year: 2023,
            day: 7,
            part: Some(Part::Two),
        })
    );
}

#[test]
fn prompt_retry_invalid_answers() {
    let mut input = Cursor::new("9\n1\n\n0\n26\n4\n");
    let mut output = Vec::new();
    let choice = interactive::prompt(&mut input, &mut output, date(2024, 12, 10)).unwrap();

    assert_eq!(
        choice,
        Some(Choice {
            action: Action::Initialise,
            year: 2024,
            day: 4,
            part: None,
        })
    );
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Please pick a number between 1 and 5."));
    assert!(output.contains("Invalid day (must be between 1 and 25)."));
}

#[test]
fn prompt_stop_on_exit_or_end_of_input() {
    let today = date(2024, 12, 10);
    let mut output = Vec::new();

    assert_eq!(
        interactive::prompt(&mut Cursor::new("5\n"), &mut output, today).unwrap(),
        None
    );
    assert_eq!(
        interactive::prompt(&mut Cursor::new("1\n1\n"), &mut output, today).unwrap(),
        None
    );
}
