use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct History {
    values: Vec<i64>,
}

impl History {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    fn difference_rows(&self) -> Vec<Vec<i64>> {
        let mut rows = vec![self.values.clone()];
        while let Some(last_row) = rows.last() {
            if last_row.iter().all(|v| *v == 0) {
                break;
            }

            let next_row = last_row.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
            rows.push(next_row);
        }

        rows
    }

    pub fn next_value(&self) -> i64 {
        self.difference_rows()
            .iter()
            .filter_map(|row| row.last())
            .sum()
    }

    pub fn previous_value(&self) -> i64 {
        self.difference_rows()
            .iter()
            .rev()
            .filter_map(|row| row.first())
            .fold(0, |below, first| first - below)
    }
}

pub fn read_histories<P: AsRef<Path>>(path: P) -> Result<Vec<History>> {
    let mut histories = Vec::new();
    for (ind, line) in common::input::read_lines(&path)?.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = common::input::parse_numbers(line).with_context(|| {
            format!(
                "Failed to parse history in line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        histories.push(History::new(values));
    }

    Ok(histories)
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<i64> {
    Ok(read_histories(path)?.iter().map(|h| h.next_value()).sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<i64> {
    Ok(read_histories(path)?
        .iter()
        .map(|h| h.previous_value())
        .sum())
}
