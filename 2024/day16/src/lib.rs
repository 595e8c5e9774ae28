use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Direction, Grid, Position};

#[derive(Debug)]
pub enum Error {
    NoStartPosition,
    NoEndPosition,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoStartPosition => write!(f, "No start position in map."),
            Error::NoEndPosition => write!(f, "No end position in map."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const FORWARD_SCORE: usize = 1;
const TURN_SCORE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

type Scores = Grid<[usize; 4]>;

#[derive(Debug)]
pub struct Maze {
    tiles: Grid<Tile>,
    start: Position,
    end: Position,
}

impl TryFrom<&str> for Maze {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let chars = Grid::parse_chars(value)?;
        let start = chars.find(|c| *c == 'S').ok_or(Error::NoStartPosition)?;
        let end = chars.find(|c| *c == 'E').ok_or(Error::NoEndPosition)?;
        let tiles = chars.map(|c| if *c == '#' { Tile::Wall } else { Tile::Floor });

        Ok(Self { tiles, start, end })
    }
}

impl Maze {
    pub fn min_score(&self) -> Option<usize> {
        let scores = self.scores_from(&[(self.start, Direction::East)]);
        scores[self.end].iter().copied().min().filter(|s| *s != usize::MAX)
    }

    /// Count of tiles on at least one of the best paths.
    pub fn best_path_tile_count(&self) -> Option<usize> {
        let from_start = self.scores_from(&[(self.start, Direction::East)]);
        let best = from_start[self.end]
            .iter()
            .copied()
            .min()
            .filter(|s| *s != usize::MAX)?;
        let end_states = Direction::all().map(|dir| (self.end, dir));
        let from_end = self.scores_from(&end_states);

        let count = self
            .tiles
            .positions()
            .filter(|pos| {
                Direction::all().into_iter().any(|dir| {
                    let to_here = from_start[*pos][dir.index()];
                    let to_end = from_end[*pos][dir.reverse().index()];
                    to_here != usize::MAX && to_end != usize::MAX && to_here + to_end == best
                })
            })
            .count();

        Some(count)
    }

    fn scores_from(&self, starts: &[(Position, Direction)]) -> Scores {
        let mut scores = Grid::new(self.tiles.row_n(), self.tiles.col_n(), [usize::MAX; 4]);
        let mut queue = BinaryHeap::new();
        for (pos, dir) in starts {
            scores[*pos][dir.index()] = 0;
            queue.push(Reverse((0, *pos, *dir)));
        }

        while let Some(Reverse((score, pos, dir))) = queue.pop() {
            if score > scores[pos][dir.index()] {
                continue;
            }

            let mut nexts = vec![
                (score + TURN_SCORE, pos, dir.turn_clockwise()),
                (score + TURN_SCORE, pos, dir.turn_counterclockwise()),
            ];
            if let Some(next_pos) = self.tiles.step(&pos, dir) {
                if self.tiles[next_pos] == Tile::Floor {
                    nexts.push((score + FORWARD_SCORE, next_pos, dir));
                }
            }

            for (next_score, next_pos, next_dir) in nexts {
                let best = &mut scores[next_pos][next_dir.index()];
                if next_score < *best {
                    *best = next_score;
                    queue.push(Reverse((next_score, next_pos, next_dir)));
                }
            }
        }

        scores
    }
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let text = common::input::read_text(&path)?;
    Maze::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse maze in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_maze(path)?.min_score())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_maze(path)?.best_path_tile_count())
}
