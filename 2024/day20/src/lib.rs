use std::{
    collections::VecDeque,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{self, Grid, Position};

#[derive(Debug)]
pub enum Error {
    InvalidGrid(grid::Error),
    NoStart,
    NoEnd,
    Unreachable,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid racetrack: {}", e),
            Error::NoStart => write!(f, "Can't find start position in racetrack."),
            Error::NoEnd => write!(f, "Can't find end position in racetrack."),
            Error::Unreachable => write!(f, "End of racetrack is unreachable from start."),
        }
    }
}

impl error::Error for Error {}

impl From<grid::Error> for Error {
    fn from(value: grid::Error) -> Self {
        Error::InvalidGrid(value)
    }
}

pub const SAVE_THRESHOLD: usize = 100;
pub const SHORT_CHEAT_TIME: usize = 2;
pub const LONG_CHEAT_TIME: usize = 20;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Least picoseconds a cheat has to save to be counted
    #[arg(long, default_value_t = SAVE_THRESHOLD)]
    pub threshold: usize,
}

pub struct Racetrack {
    // Track positions in racing order, from start to end.
    track: Vec<Position>,
}

impl TryFrom<&str> for Racetrack {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let map = Grid::parse_with(value, |c| match c {
            '#' | '.' | 'S' | 'E' => Some(c),
            _ => None,
        })?;
        let start = map.find(|c| *c == 'S').ok_or(Error::NoStart)?;
        let end = map.find(|c| *c == 'E').ok_or(Error::NoEnd)?;

        let mut times: Grid<Option<usize>> = Grid::new(map.row_n(), map.col_n(), None);
        times[start] = Some(0);
        let mut track = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            let Some(time) = times[pos].map(|t| t + 1) else {
                continue;
            };
            for next in map.neighbors(&pos) {
                if map[next] != '#' && times[next].is_none() {
                    times[next] = Some(time);
                    track.push(next);
                    queue.push_back(next);
                }
            }
        }

        if times[end].is_none() {
            return Err(Error::Unreachable);
        }
        track.sort_by_key(|p| times[*p]);
        track.truncate(times[end].map_or(0, |t| t + 1));

        Ok(Self { track })
    }
}

impl Racetrack {
    pub fn normal_time(&self) -> usize {
        self.track.len().saturating_sub(1)
    }

    /// Count of cheats lasting at most `max_cheat_time` that save at least `threshold`.
    pub fn cheat_count(&self, max_cheat_time: usize, threshold: usize) -> usize {
        let mut count = 0;
        for (from_time, from) in self.track.iter().enumerate() {
            for (to_time, to) in self
                .track
                .iter()
                .enumerate()
                .skip(from_time + threshold + 1)
            {
                let cheat_time = from.manhattan(to);
                if cheat_time <= max_cheat_time && to_time - from_time >= threshold + cheat_time {
                    count += 1;
                }
            }
        }

        count
    }
}

pub fn read_racetrack<P: AsRef<Path>>(path: P) -> Result<Racetrack> {
    let text = common::input::read_text(&path)?;
    Racetrack::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse racetrack in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P, threshold: usize) -> Result<usize> {
    Ok(read_racetrack(path)?.cheat_count(SHORT_CHEAT_TIME, threshold))
}

pub fn part2<P: AsRef<Path>>(path: P, threshold: usize) -> Result<usize> {
    Ok(read_racetrack(path)?.cheat_count(LONG_CHEAT_TIME, threshold))
}
