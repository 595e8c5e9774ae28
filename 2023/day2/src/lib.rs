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
    InvalidGameText(String),
    InvalidCubeText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGameText(s) => write!(f, "Invalid text({}) for game.", s),
            Error::InvalidCubeText(s) => write!(f, "Invalid text({}) for cubes.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

pub const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

impl TryFrom<&str> for CubeSet {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static CUBE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+) (red|green|blue)$").unwrap());

        let mut set = CubeSet::default();
        for cube_text in value.split(',').map(|s| s.trim()) {
            let caps = CUBE_PATTERN
                .captures(cube_text)
                .ok_or_else(|| Error::InvalidCubeText(cube_text.to_string()))?;
            let n = caps[1]
                .parse::<u32>()
                .map_err(|_| Error::InvalidCubeText(cube_text.to_string()))?;
            match &caps[2] {
                "red" => set.red += n,
                "green" => set.green += n,
                _ => set.blue += n,
            }
        }

        Ok(set)
    }
}

impl CubeSet {
    pub fn contains(&self, other: &Self) -> bool {
        self.red >= other.red && self.green >= other.green && self.blue >= other.blue
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    pub fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    id: u32,
    reveals: Vec<CubeSet>,
}

impl TryFrom<&str> for Game {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static GAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Game (\d+):(.*)$").unwrap());

        let caps = GAME_PATTERN
            .captures(value.trim())
            .ok_or_else(|| Error::InvalidGameText(value.to_string()))?;
        let id = caps[1]
            .parse::<u32>()
            .map_err(|_| Error::InvalidGameText(value.to_string()))?;
        let reveals = caps[2]
            .split(';')
            .map(CubeSet::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { id, reveals })
    }
}

impl Game {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_possible_with(&self, bag: &CubeSet) -> bool {
        self.reveals.iter().all(|r| bag.contains(r))
    }

    pub fn min_set(&self) -> CubeSet {
        self.reveals
            .iter()
            .fold(CubeSet::default(), |acc, r| acc.union(r))
    }
}

pub fn read_games<P: AsRef<Path>>(path: P) -> Result<Vec<Game>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Game::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse games in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u32> {
    Ok(read_games(path)?
        .iter()
        .filter(|g| g.is_possible_with(&BAG))
        .map(|g| g.id())
        .sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u32> {
    Ok(read_games(path)?.iter().map(|g| g.min_set().power()).sum())
}
