use std::{collections::HashMap, error, fmt::Display, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidLocationId(String),
    MissingLocationId(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLocationId(s) => write!(f, "Invalid text({}) for location ID.", s),
            Error::MissingLocationId(s) => write!(
                f,
                "Expect two location IDs in each line, given line({}).",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct LocationLists {
    left: Vec<usize>,
    right: Vec<usize>,
}

impl LocationLists {
    pub fn total_distance(&self) -> usize {
        let mut left = self.left.clone();
        let mut right = self.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        left.iter().zip(right.iter()).map(|(l, r)| l.abs_diff(*r)).sum()
    }

    pub fn similarity_score(&self) -> usize {
        let mut right_counts = HashMap::new();
        for id in &self.right {
            *right_counts.entry(*id).or_insert(0) += 1;
        }

        self.left
            .iter()
            .map(|id| id * right_counts.get(id).copied().unwrap_or(0))
            .sum()
    }

    fn push_line(&mut self, line: &str) -> Result<(), Error> {
        let mut ids = line.split_ascii_whitespace().map(|s| {
            s.parse::<usize>()
                .map_err(|_| Error::InvalidLocationId(s.to_string()))
        });
        let (Some(left), Some(right)) = (ids.next(), ids.next()) else {
            return Err(Error::MissingLocationId(line.to_string()));
        };

        self.left.push(left?);
        self.right.push(right?);
        Ok(())
    }
}

pub fn read_lists<P: AsRef<Path>>(path: P) -> Result<LocationLists> {
    let mut lists = LocationLists::default();
    for line in common::input::read_lines(&path)? {
        if line.trim().is_empty() {
            continue;
        }

        lists
            .push_line(&line)
            .with_context(|| format!("Failed to read location IDs in line({}).", line))?;
    }

    Ok(lists)
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_lists(path)?.total_distance())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_lists(path)?.similarity_score())
}
