use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoDigitInLine(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoDigitInLine(s) => write!(f, "No digit found in line({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const DIGIT_NAMES: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn digit_at(line: &str, ind: usize, with_names: bool) -> Option<u32> {
    let rest = &line[ind..];
    if let Some(d) = rest.chars().next().and_then(|c| c.to_digit(10)) {
        return Some(d);
    }

    if with_names {
        // Names may overlap, e.g. "eightwo", so every start index is checked.
        DIGIT_NAMES
            .iter()
            .position(|name| rest.starts_with(name))
            .map(|ind| ind as u32 + 1)
    } else {
        None
    }
}

pub fn calibration_value(line: &str, with_names: bool) -> Result<u32, Error> {
    let mut digits = line
        .char_indices()
        .filter_map(|(ind, _)| digit_at(line, ind, with_names));
    let first = digits
        .next()
        .ok_or_else(|| Error::NoDigitInLine(line.to_string()))?;
    let last = digits.last().unwrap_or(first);

    Ok(first * 10 + last)
}

pub fn calibration_sum<P: AsRef<Path>>(path: P, with_names: bool) -> Result<u32> {
    let lines = common::input::read_lines(&path)?;
    let mut sum = 0;
    for (ind, line) in lines.iter().enumerate().filter(|(_, l)| !l.is_empty()) {
        sum += calibration_value(line, with_names).with_context(|| {
            format!(
                "Failed to find calibration value in line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(sum)
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u32> {
    calibration_sum(path, false)
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u32> {
    calibration_sum(path, true)
}
