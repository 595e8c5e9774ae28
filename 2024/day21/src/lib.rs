use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidCode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCode(s) => write!(f, "Invalid door code({}).", s),
        }
    }
}

impl error::Error for Error {}

pub const FEW_ROBOT_N: usize = 2;
pub const MANY_ROBOT_N: usize = 25;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

struct Keypad {
    rows: &'static [&'static str],
}

const NUMERIC_KEYPAD: Keypad = Keypad {
    rows: &["789", "456", "123", " 0A"],
};
const DIRECTIONAL_KEYPAD: Keypad = Keypad {
    rows: &[" ^A", "<v>"],
};

impl Keypad {
    fn pos(&self, key: char) -> Option<(isize, isize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.chars()
                .position(|c| c == key)
                .map(|c| (r as isize, c as isize))
        })
    }

    fn gap(&self) -> Option<(isize, isize)> {
        self.pos(' ')
    }

    /// Shortest key sequences on a directional keypad that move from `from` to `to` and press it.
    fn press_paths(&self, from: char, to: char) -> Vec<String> {
        let (Some((r0, c0)), Some((r1, c1))) = (self.pos(from), self.pos(to)) else {
            return Vec::new();
        };

        let vertical = if r1 > r0 { 'v' } else { '^' };
        let horizontal = if c1 > c0 { '>' } else { '<' };
        let vertical_moves = vertical.to_string().repeat(r0.abs_diff(r1));
        let horizontal_moves = horizontal.to_string().repeat(c0.abs_diff(c1));
        let gap = self.gap();

        let mut paths = Vec::with_capacity(2);
        // Horizontal first passes the corner (r0, c1), vertical first passes (r1, c0).
        if gap != Some((r0, c1)) {
            paths.push(format!("{}{}A", horizontal_moves, vertical_moves));
        }
        if gap != Some((r1, c0)) {
            let path = format!("{}{}A", vertical_moves, horizontal_moves);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        paths
    }
}

#[derive(Debug, Default)]
struct PressCounter {
    cache: HashMap<(char, char, usize), usize>,
}

impl PressCounter {
    /// Presses of the human to make the directional keypad `depth` levels away type `seq`.
    fn sequence_cost(&mut self, seq: &str, depth: usize) -> usize {
        if depth == 0 {
            return seq.len();
        }

        let mut last = 'A';
        let mut cost = 0;
        for key in seq.chars() {
            cost += self.move_cost(last, key, depth);
            last = key;
        }

        cost
    }

    fn move_cost(&mut self, from: char, to: char, depth: usize) -> usize {
        if let Some(cost) = self.cache.get(&(from, to, depth)) {
            return *cost;
        }

        let cost = DIRECTIONAL_KEYPAD
            .press_paths(from, to)
            .iter()
            .map(|p| self.sequence_cost(p, depth - 1))
            .min()
            .unwrap_or(usize::MAX);
        self.cache.insert((from, to, depth), cost);
        cost
    }

    fn code_cost(&mut self, code: &str, robot_n: usize) -> usize {
        let mut last = 'A';
        let mut cost = 0;
        for key in code.chars() {
            cost += NUMERIC_KEYPAD
                .press_paths(last, key)
                .iter()
                .map(|p| self.sequence_cost(p, robot_n))
                .min()
                .unwrap_or(usize::MAX);
            last = key;
        }

        cost
    }
}

#[derive(Debug, Clone)]
pub struct DoorCode {
    text: String,
    numeric: usize,
}

impl TryFrom<&str> for DoorCode {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let text = value.trim();
        if text.is_empty() || text.chars().any(|c| NUMERIC_KEYPAD.pos(c).is_none() || c == ' ') {
            return Err(Error::InvalidCode(value.to_string()));
        }

        let numeric = text
            .trim_end_matches('A')
            .parse::<usize>()
            .map_err(|_| Error::InvalidCode(value.to_string()))?;

        Ok(Self {
            text: text.to_string(),
            numeric,
        })
    }
}

/// Sum of complexities of given codes, with `robot_n` robots on directional keypads between.
pub fn complexity_sum(codes: &[DoorCode], robot_n: usize) -> usize {
    let mut counter = PressCounter::default();
    codes
        .iter()
        .map(|c| counter.code_cost(&c.text, robot_n) * c.numeric)
        .sum()
}

pub fn read_codes<P: AsRef<Path>>(path: P) -> Result<Vec<DoorCode>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| DoorCode::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse door codes in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(complexity_sum(&read_codes(path)?, FEW_ROBOT_N))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(complexity_sum(&read_codes(path)?, MANY_ROBOT_N))
}
