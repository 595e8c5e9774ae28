use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{self, Grid};

#[derive(Debug)]
pub enum Error {
    InvalidGrid(grid::Error),
    NoReflection(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid pattern: {}", e),
            Error::NoReflection(ind) => {
                write!(f, "Can't find line of reflection in pattern {}.", ind + 1)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub struct Pattern {
    cells: Grid<bool>,
}

impl TryFrom<&str> for Pattern {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let cells = Grid::parse_with(value, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })
        .map_err(Error::InvalidGrid)?;

        Ok(Self { cells })
    }
}

/// Rows above the horizontal reflection line with exactly `smudge_n` differences.
fn reflection_row(cells: &Grid<bool>, smudge_n: usize) -> Option<usize> {
    (1..cells.row_n()).find(|above_n| {
        let diff_n: usize = (0..*above_n)
            .rev()
            .zip(*above_n..cells.row_n())
            .map(|(up, down)| {
                cells
                    .row(up)
                    .iter()
                    .zip(cells.row(down))
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum();
        diff_n == smudge_n
    })
}

impl Pattern {
    pub fn summary(&self, smudge_n: usize) -> Option<usize> {
        reflection_row(&self.cells.transpose(), smudge_n)
            .or_else(|| reflection_row(&self.cells, smudge_n).map(|n| n * 100))
    }
}

pub fn read_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<Pattern>> {
    let text = common::input::read_text(&path)?;
    common::input::split_blocks(&text)
        .iter()
        .map(|b| Pattern::try_from(b.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse patterns in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn summary_sum<P: AsRef<Path>>(path: P, smudge_n: usize) -> Result<usize> {
    let mut sum = 0;
    for (ind, pattern) in read_patterns(path)?.iter().enumerate() {
        sum += pattern.summary(smudge_n).ok_or(Error::NoReflection(ind))?;
    }

    Ok(sum)
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    summary_sum(path, 0)
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    summary_sum(path, 1)
}
