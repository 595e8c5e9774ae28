use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct Report {
    levels: Vec<isize>,
}

impl TryFrom<&str> for Report {
    type Error = common::input::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        common::input::parse_numbers(value).map(|levels| Self { levels })
    }
}

impl Report {
    pub fn is_safe(&self) -> bool {
        Self::is_safe_levels(self.levels.iter().copied())
    }

    pub fn is_safe_with_dampener(&self) -> bool {
        self.is_safe()
            || (0..self.levels.len()).any(|skip_ind| {
                Self::is_safe_levels(
                    self.levels
                        .iter()
                        .enumerate()
                        .filter(|(ind, _)| *ind != skip_ind)
                        .map(|(_, level)| *level),
                )
            })
    }

    fn is_safe_levels<I: Iterator<Item = isize>>(levels: I) -> bool {
        let mut last_op = None;
        let mut sign_op = None;
        for level in levels {
            if let Some(last) = last_op {
                let diff: isize = level - last;
                if !(1..=3).contains(&diff.abs()) {
                    return false;
                }

                match sign_op {
                    None => sign_op = Some(diff.signum()),
                    Some(sign) if sign != diff.signum() => return false,
                    _ => (),
                }
            }

            last_op = Some(level);
        }

        true
    }
}

pub fn read_reports<P: AsRef<Path>>(path: P) -> Result<Vec<Report>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            Report::try_from(l.as_str())
                .with_context(|| format!("Failed to parse report from given text({}).", l))
        })
        .collect()
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_reports(path)?.iter().filter(|r| r.is_safe()).count())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_reports(path)?
        .iter()
        .filter(|r| r.is_safe_with_dampener())
        .count())
}
