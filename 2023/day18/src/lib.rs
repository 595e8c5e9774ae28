use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::Direction;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidStepText(String),
    InvalidColorDirection(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepText(s) => write!(f, "Invalid text({}) for dig step.", s),
            Error::InvalidColorDirection(c) => {
                write!(f, "Invalid direction digit({}) in color code.", c)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct DigStep {
    dir: Direction,
    len: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct PlanEntry {
    step: DigStep,
    // Step hidden in the color code.
    color_step: DigStep,
}

impl TryFrom<&str> for PlanEntry {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^([URDL]) (\d+) \(#([0-9a-fA-F]{5})([0-9a-fA-F])\)$").unwrap()
        });

        let invalid = || Error::InvalidStepText(value.to_string());
        let caps = ENTRY_PATTERN.captures(value.trim()).ok_or_else(invalid)?;
        let dir = caps[1]
            .chars()
            .next()
            .and_then(|c| Direction::try_from(c).ok())
            .ok_or_else(invalid)?;
        let len = caps[2].parse::<i64>().map_err(|_| invalid())?;
        let color_len = i64::from_str_radix(&caps[3], 16).map_err(|_| invalid())?;
        let color_dir = match caps[4].chars().next() {
            Some('0') => Direction::East,
            Some('1') => Direction::South,
            Some('2') => Direction::West,
            Some('3') => Direction::North,
            Some(other) => return Err(Error::InvalidColorDirection(other)),
            None => return Err(invalid()),
        };

        Ok(Self {
            step: DigStep { dir, len },
            color_step: DigStep {
                dir: color_dir,
                len: color_len,
            },
        })
    }
}

/// Cubic meters of lava the lagoon dug by given steps holds.
pub fn lagoon_volume(steps: &[DigStep]) -> i64 {
    let (mut r, mut c) = (0i64, 0i64);
    let mut twice_area = 0;
    let mut boundary = 0;
    for step in steps {
        let (dr, dc) = step.dir.offset();
        let (next_r, next_c) = (r + dr as i64 * step.len, c + dc as i64 * step.len);
        // Shoelace formula.
        twice_area += c * next_r - next_c * r;
        boundary += step.len;
        (r, c) = (next_r, next_c);
    }

    // Pick's theorem gives interior points, plus the trench itself.
    twice_area.abs() / 2 + boundary / 2 + 1
}

pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<Vec<PlanEntry>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| PlanEntry::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse dig plan in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<i64> {
    let steps = read_plan(path)?.iter().map(|e| e.step).collect::<Vec<_>>();
    Ok(lagoon_volume(&steps))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<i64> {
    let steps = read_plan(path)?
        .iter()
        .map(|e| e.color_step)
        .collect::<Vec<_>>();
    Ok(lagoon_volume(&steps))
}
