use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidRecordText(String),
    InvalidSpring(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRecordText(s) => write!(f, "Invalid text({}) for condition record.", s),
            Error::InvalidSpring(c) => write!(f, "Invalid spring condition({}).", c),
        }
    }
}

impl error::Error for Error {}

pub const UNFOLD_TIMES: usize = 5;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spring {
    Operational,
    Damaged,
    Unknown,
}

impl TryFrom<char> for Spring {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '.' => Ok(Spring::Operational),
            '#' => Ok(Spring::Damaged),
            '?' => Ok(Spring::Unknown),
            other => Err(Error::InvalidSpring(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    springs: Vec<Spring>,
    groups: Vec<usize>,
}

impl TryFrom<&str> for Record {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (springs_text, groups_text) = value
            .trim()
            .split_once(' ')
            .ok_or_else(|| Error::InvalidRecordText(value.to_string()))?;
        let springs = springs_text
            .chars()
            .map(Spring::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let groups = groups_text
            .split(',')
            .map(|s| s.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidRecordText(value.to_string()))?;

        Ok(Self { springs, groups })
    }
}

impl Record {
    pub fn unfold(&self, times: usize) -> Self {
        let mut springs = Vec::with_capacity(self.springs.len() * times + times);
        for ind in 0..times {
            if ind > 0 {
                springs.push(Spring::Unknown);
            }
            springs.extend_from_slice(&self.springs);
        }

        Self {
            springs,
            groups: self.groups.repeat(times),
        }
    }

    pub fn arrangement_count(&self) -> u64 {
        let spring_n = self.springs.len();
        let group_n = self.groups.len();
        // counts[i][g] is arrangements of springs[i..] matching groups[g..].
        let mut counts = vec![vec![0u64; group_n + 1]; spring_n + 2];
        counts[spring_n][group_n] = 1;
        counts[spring_n + 1][group_n] = 1;
        for ind in (0..spring_n).rev() {
            let spring = self.springs[ind];
            for g in 0..=group_n {
                let mut count = 0;
                if spring != Spring::Damaged {
                    count += counts[ind + 1][g];
                }

                if spring != Spring::Operational && g < group_n {
                    let end = ind + self.groups[g];
                    if end <= spring_n
                        && self.springs[ind..end]
                            .iter()
                            .all(|s| *s != Spring::Operational)
                        && self.springs.get(end) != Some(&Spring::Damaged)
                    {
                        count += counts[end + 1][g + 1];
                    }
                }

                counts[ind][g] = count;
            }
        }

        counts[0][0]
    }
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Record::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse condition records in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(read_records(path)?
        .iter()
        .map(|r| r.arrangement_count())
        .sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(read_records(path)?
        .iter()
        .map(|r| r.unfold(UNFOLD_TIMES).arrangement_count())
        .sum())
}
