use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidLine(String),
    NoLine(&'static str),
    InconsistentRaceCount(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLine(s) => write!(f, "Invalid line({}) in race sheet.", s),
            Error::NoLine(name) => write!(f, "Can't find line of {} in race sheet.", name),
            Error::InconsistentRaceCount(time_n, dist_n) => write!(
                f,
                "Given {} time(s) but {} record distance(s).",
                time_n, dist_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn beats_record(&self, hold: u64) -> bool {
        hold <= self.time && hold as u128 * (self.time - hold) as u128 > self.record as u128
    }

    /// Count of hold times that travel farther than the record.
    pub fn win_way_count(&self) -> u64 {
        // Roots of hold * (time - hold) = record give the bounds, then fix rounding errors.
        let time = self.time as f64;
        let disc = time * time - 4.0 * self.record as f64;
        if disc < 0.0 {
            return 0;
        }

        let mid = self.time / 2;
        let mut lo = ((time - disc.sqrt()) / 2.0).floor().max(0.0) as u64;
        while lo <= mid && !self.beats_record(lo) {
            lo += 1;
        }
        while lo > 0 && self.beats_record(lo - 1) {
            lo -= 1;
        }
        if lo > mid {
            return 0;
        }

        // Distance is symmetric around half of the time.
        let hi = self.time - lo;
        hi - lo + 1
    }
}

fn numbers_in_line<'a>(lines: &[&'a str], name: &'static str) -> Result<&'a str, Error> {
    let line: &'a str = lines
        .iter()
        .find(|l| l.starts_with(name))
        .copied()
        .ok_or(Error::NoLine(name))?;
    Ok(&line[name.len() + 1..])
}

pub fn read_races<P: AsRef<Path>>(path: P, joined: bool) -> Result<Vec<Race>> {
    let text = common::input::read_text(&path)?;
    let parse = || -> Result<Vec<Race>, Error> {
        let lines = text.lines().collect::<Vec<_>>();
        let mut number_texts = ["Time", "Distance"]
            .iter()
            .map(|name| numbers_in_line(&lines, name).map(|s| s.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        if joined {
            for s in number_texts.iter_mut() {
                *s = s.split_ascii_whitespace().collect();
            }
        }

        let mut numbers = number_texts.iter().map(|s| {
            common::input::parse_numbers::<u64>(s).map_err(|_| Error::InvalidLine(s.clone()))
        });
        let times = numbers.next().ok_or(Error::NoLine("Time"))??;
        let records = numbers.next().ok_or(Error::NoLine("Distance"))??;
        if times.len() != records.len() {
            return Err(Error::InconsistentRaceCount(times.len(), records.len()));
        }

        Ok(times
            .into_iter()
            .zip(records)
            .map(|(time, record)| Race { time, record })
            .collect())
    };

    parse().with_context(|| {
        format!(
            "Failed to parse race sheet in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(read_races(path, false)?
        .iter()
        .map(|r| r.win_way_count())
        .product())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(read_races(path, true)?
        .iter()
        .map(|r| r.win_way_count())
        .product())
}
