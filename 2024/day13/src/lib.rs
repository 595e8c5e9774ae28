use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidMachineText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMachineText(s) => write!(f, "Invalid text({}) for claw machine.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub const PRIZE_OFFSET: i64 = 10_000_000_000_000;
const A_COST: i64 = 3;
const B_COST: i64 = 1;

#[derive(Debug, Clone)]
pub struct ClawMachine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl TryFrom<&str> for ClawMachine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static MACHINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
            )
            .unwrap()
        });

        let caps = MACHINE_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidMachineText(value.to_string()))?;
        let n = |ind: usize| {
            caps[ind]
                .parse::<i64>()
                .map_err(|_| Error::InvalidMachineText(value.to_string()))
        };

        Ok(Self {
            a: (n(1)?, n(2)?),
            b: (n(3)?, n(4)?),
            prize: (n(5)?, n(6)?),
        })
    }
}

impl ClawMachine {
    pub fn move_prize(&mut self, offset: i64) {
        self.prize = (self.prize.0 + offset, self.prize.1 + offset);
    }

    /// Presses of button A and B to win the prize, by Cramer's rule.
    pub fn presses(&self) -> Option<(i64, i64)> {
        let det = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if det == 0 {
            return None;
        }

        let a_num = self.prize.0 * self.b.1 - self.prize.1 * self.b.0;
        let b_num = self.a.0 * self.prize.1 - self.a.1 * self.prize.0;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }

        let (a_n, b_n) = (a_num / det, b_num / det);
        if a_n < 0 || b_n < 0 {
            None
        } else {
            Some((a_n, b_n))
        }
    }

    pub fn min_tokens(&self, press_limit: Option<i64>) -> Option<i64> {
        self.presses()
            .filter(|(a_n, b_n)| press_limit.map_or(true, |limit| *a_n <= limit && *b_n <= limit))
            .map(|(a_n, b_n)| a_n * A_COST + b_n * B_COST)
    }
}

pub fn read_machines<P: AsRef<Path>>(path: P) -> Result<Vec<ClawMachine>> {
    let text = common::input::read_text(&path)?;
    common::input::split_blocks(&text)
        .iter()
        .map(|b| {
            ClawMachine::try_from(b.as_str())
                .with_context(|| format!("Failed to parse claw machine from given text({}).", b))
        })
        .collect()
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<i64> {
    Ok(read_machines(path)?
        .iter()
        .filter_map(|m| m.min_tokens(Some(100)))
        .sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<i64> {
    Ok(read_machines(path)?
        .iter_mut()
        .filter_map(|m| {
            m.move_prize(PRIZE_OFFSET);
            m.min_tokens(None)
        })
        .sum())
}
