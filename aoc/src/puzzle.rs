use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use chrono::{Datelike, NaiveDate};

pub const FIRST_YEAR: i32 = 2015;
pub const LAST_DAY: u32 = 25;

#[derive(Debug)]
pub enum Error {
    InvalidYear(i32),
    InvalidDay(u32),
    InvalidPart(u8),
    MissingDay,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidYear(y) => write!(
                f,
                "Invalid year({}), the year must be {} or later.",
                y, FIRST_YEAR
            ),
            Error::InvalidDay(d) => write!(
                f,
                "Invalid day({}), the day must be between 1 and {}.",
                d, LAST_DAY
            ),
            Error::InvalidPart(p) => write!(f, "Invalid part({}), the part must be 1 or 2.", p),
            Error::MissingDay => write!(
                f,
                "No day given, and today isn't a day of Advent of Code to default to."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl TryFrom<u8> for Part {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(Error::InvalidPart(other)),
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl Part {
    pub fn level(&self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    year: i32,
    day: u32,
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

impl Puzzle {
    pub fn new(year: i32, day: u32) -> Result<Self, Error> {
        let year = validate_year(year)?;
        if !(1..=LAST_DAY).contains(&day) {
            return Err(Error::InvalidDay(day));
        }

        Ok(Self { year, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn crate_name(&self) -> String {
        format!("aoc{}-day{}", self.year, self.day)
    }

    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(self.year.to_string())
            .join(format!("day{}", self.day))
    }

    pub fn input_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join("inputs.txt")
    }

    pub fn example_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join("tests").join("example.txt")
    }

    pub fn readme_path(&self, root: &Path) -> PathBuf {
        self.dir(root).join("README.md")
    }
}

pub fn validate_year(year: i32) -> Result<i32, Error> {
    if year < FIRST_YEAR {
        Err(Error::InvalidYear(year))
    } else {
        Ok(year)
    }
}

/// Day 0 stands for every day of the year.
pub fn validate_day_or_all(day: u32) -> Result<u32, Error> {
    if day > LAST_DAY {
        Err(Error::InvalidDay(day))
    } else {
        Ok(day)
    }
}

/// The year of the latest event: this year in December, last year otherwise.
pub fn default_year(today: NaiveDate) -> i32 {
    if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    }
}

pub fn default_day(today: NaiveDate) -> Option<u32> {
    if today.month() == 12 && today.day() <= LAST_DAY {
        Some(today.day())
    } else {
        None
    }
}

pub fn resolve_day(day: Option<u32>, today: NaiveDate) -> Result<u32, Error> {
    day.or_else(|| default_day(today)).ok_or(Error::MissingDay)
}
