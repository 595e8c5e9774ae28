use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{self, Direction, Grid, Position};

#[derive(Debug)]
pub enum Error {
    InvalidGrid(grid::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid contraption: {}", e),
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
    Empty,
    // '/'
    ForwardMirror,
    // '\'
    BackwardMirror,
    VerticalSplitter,
    HorizontalSplitter,
}

impl Tile {
    fn out_dirs(&self, dir: Direction) -> Vec<Direction> {
        use Direction::*;
        match (self, dir) {
            (Tile::ForwardMirror, East) => vec![North],
            (Tile::ForwardMirror, North) => vec![East],
            (Tile::ForwardMirror, West) => vec![South],
            (Tile::ForwardMirror, South) => vec![West],
            (Tile::BackwardMirror, East) => vec![South],
            (Tile::BackwardMirror, South) => vec![East],
            (Tile::BackwardMirror, West) => vec![North],
            (Tile::BackwardMirror, North) => vec![West],
            (Tile::VerticalSplitter, East | West) => vec![North, South],
            (Tile::HorizontalSplitter, North | South) => vec![East, West],
            _ => vec![dir],
        }
    }
}

pub struct Contraption {
    tiles: Grid<Tile>,
}

impl TryFrom<&str> for Contraption {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let tiles = Grid::parse_with(value, |c| match c {
            '.' => Some(Tile::Empty),
            '/' => Some(Tile::ForwardMirror),
            '\\' => Some(Tile::BackwardMirror),
            '|' => Some(Tile::VerticalSplitter),
            '-' => Some(Tile::HorizontalSplitter),
            _ => None,
        })
        .map_err(Error::InvalidGrid)?;

        Ok(Self { tiles })
    }
}

impl Contraption {
    pub fn energized_count(&self, start: Position, dir: Direction) -> usize {
        let mut visited = Grid::new(self.tiles.row_n(), self.tiles.col_n(), [false; 4]);
        let mut beams = vec![(start, dir)];
        while let Some((pos, dir)) = beams.pop() {
            let Some(seen) = visited.get_mut(&pos) else {
                continue;
            };
            if seen[dir.index()] {
                continue;
            }
            seen[dir.index()] = true;

            for out_dir in self.tiles[pos].out_dirs(dir) {
                if let Some(next) = self.tiles.step(&pos, out_dir) {
                    beams.push((next, out_dir));
                }
            }
        }

        visited.iter().filter(|(_, s)| s.iter().any(|v| *v)).count()
    }

    pub fn max_energized_count(&self) -> usize {
        let row_n = self.tiles.row_n();
        let col_n = self.tiles.col_n();
        let mut entries = Vec::with_capacity(2 * (row_n + col_n));
        for r in 0..row_n {
            entries.push((Position::new(r, 0), Direction::East));
            entries.push((Position::new(r, col_n - 1), Direction::West));
        }
        for c in 0..col_n {
            entries.push((Position::new(0, c), Direction::South));
            entries.push((Position::new(row_n - 1, c), Direction::North));
        }

        entries
            .into_iter()
            .map(|(pos, dir)| self.energized_count(pos, dir))
            .max()
            .unwrap_or(0)
    }
}

pub fn read_contraption<P: AsRef<Path>>(path: P) -> Result<Contraption> {
    let text = common::input::read_text(&path)?;
    Contraption::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse contraption in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_contraption(path)?.energized_count(Position::new(0, 0), Direction::East))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_contraption(path)?.max_energized_count())
}
