use std::{
    collections::HashSet,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Direction, Grid, Position};

#[derive(Debug)]
pub enum Error {
    NoGuard,
    MultipleGuards(Position, Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoGuard => write!(f, "No guard(^) in given map."),
            Error::MultipleGuards(last_pos, pos) => write!(
                f,
                "Expect only one guard, given two({}, {}).",
                last_pos, pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Floor,
    Obstruction,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Patrol {
    Leave(HashSet<Position>),
    Loop,
}

#[derive(Debug)]
pub struct Lab {
    tiles: Grid<Tile>,
    guard_pos: Position,
}

impl Lab {
    pub fn patrol(&self, extra_obstruction: Option<Position>) -> Patrol {
        let mut seen_states = Grid::new(self.tiles.row_n(), self.tiles.col_n(), [false; 4]);
        let mut pos = self.guard_pos;
        let mut dir = Direction::North;
        loop {
            let seen = &mut seen_states[pos][dir.index()];
            if *seen {
                return Patrol::Loop;
            }
            *seen = true;

            let Some(next_pos) = self.tiles.step(&pos, dir) else {
                break;
            };

            if self.tiles[next_pos] == Tile::Obstruction || Some(next_pos) == extra_obstruction {
                dir = dir.turn_clockwise();
            } else {
                pos = next_pos;
            }
        }

        Patrol::Leave(
            seen_states
                .iter()
                .filter(|(_, dirs)| dirs.iter().any(|d| *d))
                .map(|(pos, _)| pos)
                .collect(),
        )
    }

    pub fn visited_count(&self) -> usize {
        match self.patrol(None) {
            Patrol::Leave(visited) => visited.len(),
            Patrol::Loop => 0,
        }
    }

    pub fn loop_obstruction_count(&self) -> usize {
        let Patrol::Leave(visited) = self.patrol(None) else {
            return 0;
        };

        visited
            .into_iter()
            .filter(|pos| *pos != self.guard_pos)
            .filter(|pos| self.patrol(Some(*pos)) == Patrol::Loop)
            .count()
    }
}

impl TryFrom<&str> for Lab {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let chars = Grid::parse_chars(value)?;
        let mut guard_pos = None;
        for pos in chars.find_all(|c| *c == '^') {
            if let Some(last_pos) = guard_pos {
                return Err(Error::MultipleGuards(last_pos, pos).into());
            }
            guard_pos = Some(pos);
        }

        let guard_pos = guard_pos.ok_or(Error::NoGuard)?;
        let tiles = chars.map(|c| {
            if *c == '#' {
                Tile::Obstruction
            } else {
                Tile::Floor
            }
        });

        Ok(Self { tiles, guard_pos })
    }
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Lab> {
    let text = common::input::read_text(&path)?;
    Lab::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse lab map in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_lab(path)?.visited_count())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_lab(path)?.loop_obstruction_count())
}
