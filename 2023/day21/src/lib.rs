use std::{
    collections::{HashMap, VecDeque},
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
    NoStart,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid garden map: {}", e),
            Error::NoStart => write!(f, "Can't find the starting position(S)."),
        }
    }
}

impl error::Error for Error {}

pub const SHORT_STEP_N: usize = 64;
pub const LONG_STEP_N: usize = 26_501_365;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Exact number of steps the elf walks
    #[arg(long)]
    pub steps: Option<usize>,
}

pub struct Garden {
    rocks: Grid<bool>,
    start: Position,
}

impl TryFrom<&str> for Garden {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let tiles = Grid::parse_with(value, |c| match c {
            '.' | '#' | 'S' => Some(c),
            _ => None,
        })
        .map_err(Error::InvalidGrid)?;
        let start = tiles.find(|c| *c == 'S').ok_or(Error::NoStart)?;

        Ok(Self {
            rocks: tiles.map(|c| *c == '#'),
            start,
        })
    }
}

fn reachable_count<'a, I>(distances: I, step_n: usize) -> usize
where
    I: Iterator<Item = &'a usize>,
{
    // Stepping back and forth wastes 2 steps, so same parity plots are reachable too.
    distances
        .filter(|d| **d <= step_n && **d % 2 == step_n % 2)
        .count()
}

impl Garden {
    fn is_rock_at(&self, r: i64, c: i64) -> bool {
        let row_n = self.rocks.row_n() as i64;
        let col_n = self.rocks.col_n() as i64;
        self.rocks[Position::new(
            r.rem_euclid(row_n) as usize,
            c.rem_euclid(col_n) as usize,
        )]
    }

    /// Distances of plots within `max_step_n` steps, on the map repeating infinitely.
    fn infinite_distances(&self, max_step_n: usize) -> HashMap<(i64, i64), usize> {
        let start = (self.start.r as i64, self.start.c as i64);
        let mut distances = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([(start, 0)]);
        while let Some(((r, c), dist)) = queue.pop_front() {
            if dist == max_step_n {
                continue;
            }

            for dir in Direction::all() {
                let (dr, dc) = dir.offset();
                let next = (r + dr as i64, c + dc as i64);
                if !self.is_rock_at(next.0, next.1) && !distances.contains_key(&next) {
                    distances.insert(next, dist + 1);
                    queue.push_back((next, dist + 1));
                }
            }
        }

        distances
    }

    pub fn reachable_plot_count(&self, step_n: usize) -> usize {
        let mut distances = Grid::new(self.rocks.row_n(), self.rocks.col_n(), None);
        distances[self.start] = Some(0);
        let mut queue = VecDeque::from([self.start]);
        while let Some(pos) = queue.pop_front() {
            let Some(dist) = distances[pos] else {
                continue;
            };
            if dist == step_n {
                continue;
            }

            for next in self.rocks.neighbors(&pos) {
                if !self.rocks[next] && distances[next].is_none() {
                    distances[next] = Some(dist + 1);
                    queue.push_back(next);
                }
            }
        }

        let reached = distances.iter().filter_map(|(_, d)| d.as_ref()).collect::<Vec<_>>();
        reachable_count(reached.into_iter(), step_n)
    }

    /// Plots reachable on the infinite map.
    ///
    /// Far walks rely on the clear row and column through the start: the count grows
    /// quadratically in the number of whole map widths walked.
    pub fn infinite_reachable_plot_count(&self, step_n: usize) -> usize {
        let width = self.rocks.col_n();
        let rem = step_n % width;
        if step_n <= rem + 2 * width {
            return reachable_count(self.infinite_distances(step_n).values(), step_n);
        }

        let distances = self.infinite_distances(rem + 2 * width);
        let [y0, y1, y2] =
            [0, 1, 2].map(|n| reachable_count(distances.values(), rem + n * width) as i64);
        let n = (step_n / width) as i64;
        let first_diff = y1 - y0;
        let second_diff = y2 - 2 * y1 + y0;

        (y0 + n * first_diff + n * (n - 1) / 2 * second_diff) as usize
    }
}

pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Garden> {
    let text = common::input::read_text(&path)?;
    Garden::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse garden map in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P, step_n: usize) -> Result<usize> {
    Ok(read_garden(path)?.reachable_plot_count(step_n))
}

pub fn part2<P: AsRef<Path>>(path: P, step_n: usize) -> Result<usize> {
    Ok(read_garden(path)?.infinite_reachable_plot_count(step_n))
}
