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
    KeyAndLockSchematic(String),
    NeitherKeyNorLockSchematic(String),
    BrokenSchematic(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid schematic: {}", e),
            Error::KeyAndLockSchematic(s) => {
                write!(f, "Given schematic({}) should be a key or a lock, not both.", s)
            }
            Error::NeitherKeyNorLockSchematic(s) => {
                write!(f, "Given schematic({}) is neither a key nor a lock.", s)
            }
            Error::BrokenSchematic(s) => write!(
                f,
                "Given schematic({}) has at least one column with a gap in its pins.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

impl From<grid::Error> for Error {
    fn from(value: grid::Error) -> Self {
        Error::InvalidGrid(value)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchematicKind {
    Key,
    Lock,
}

#[derive(Debug, Clone)]
pub struct Schematic {
    heights: Vec<usize>,
    row_n: usize,
    kind: SchematicKind,
}

impl TryFrom<&str> for Schematic {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let tiles = Grid::parse_with(value, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;
        let is_lock = tiles.row(0).iter().all(|t| *t);
        let is_key = tiles.row(tiles.row_n() - 1).iter().all(|t| *t);
        let kind = match (is_key, is_lock) {
            (true, true) => return Err(Error::KeyAndLockSchematic(value.to_string())),
            (false, false) => return Err(Error::NeitherKeyNorLockSchematic(value.to_string())),
            (true, false) => SchematicKind::Key,
            (false, true) => SchematicKind::Lock,
        };

        let mut heights = Vec::with_capacity(tiles.col_n());
        for c in 0..tiles.col_n() {
            let mut column = tiles.column(c).copied().collect::<Vec<_>>();
            if kind == SchematicKind::Key {
                column.reverse();
            }

            // Pins fill a column from the base without any gap.
            let height = column.iter().take_while(|t| **t).count();
            if column[height..].iter().any(|t| *t) {
                return Err(Error::BrokenSchematic(value.to_string()));
            }
            heights.push(height);
        }

        Ok(Self {
            heights,
            row_n: tiles.row_n(),
            kind,
        })
    }
}

impl Schematic {
    pub fn kind(&self) -> SchematicKind {
        self.kind
    }

    pub fn fit(&self, other: &Self) -> bool {
        if self.kind == other.kind || self.heights.len() != other.heights.len() {
            return false;
        }

        let max_height = self.row_n.min(other.row_n);
        self.heights
            .iter()
            .zip(other.heights.iter())
            .all(|(a, b)| a + b <= max_height)
    }
}

pub fn read_keys_locks<P: AsRef<Path>>(path: P) -> Result<(Vec<Schematic>, Vec<Schematic>)> {
    let text = common::input::read_text(&path)?;
    let mut keys = Vec::new();
    let mut locks = Vec::new();
    for block in common::input::split_blocks(&text) {
        let schematic = Schematic::try_from(block.as_str()).with_context(|| {
            format!(
                "Failed to parse schematic in given file({}).",
                path.as_ref().display()
            )
        })?;
        match schematic.kind() {
            SchematicKind::Key => keys.push(schematic),
            SchematicKind::Lock => locks.push(schematic),
        }
    }

    Ok((keys, locks))
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    let (keys, locks) = read_keys_locks(path)?;
    Ok(keys
        .iter()
        .flat_map(|key| locks.iter().map(move |lock| (key, lock)))
        .filter(|(key, lock)| key.fit(lock))
        .count())
}
