use std::{
    collections::HashMap,
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
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid platform: {}", e),
        }
    }
}

impl error::Error for Error {}

pub const SPIN_CYCLE_N: usize = 1_000_000_000;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Rock {
    Round,
    Cube,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    rocks: Grid<Rock>,
}

impl TryFrom<&str> for Platform {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let rocks = Grid::parse_with(value, |c| match c {
            'O' => Some(Rock::Round),
            '#' => Some(Rock::Cube),
            '.' => Some(Rock::Empty),
            _ => None,
        })
        .map_err(Error::InvalidGrid)?;

        Ok(Self { rocks })
    }
}

impl Platform {
    pub fn tilt_north(&mut self) {
        for c in 0..self.rocks.col_n() {
            let mut free_r = 0;
            for r in 0..self.rocks.row_n() {
                let pos = Position::new(r, c);
                match self.rocks[pos] {
                    Rock::Cube => free_r = r + 1,
                    Rock::Round => {
                        self.rocks[pos] = Rock::Empty;
                        self.rocks[Position::new(free_r, c)] = Rock::Round;
                        free_r += 1;
                    }
                    Rock::Empty => (),
                }
            }
        }
    }

    /// Tilt north, west, south and east in turn.
    pub fn spin(&mut self) {
        for _ in 0..4 {
            self.tilt_north();
            // The next side to tilt toward turns into north.
            self.rocks = self.rocks.rotate_clockwise();
        }
    }

    pub fn north_load(&self) -> usize {
        self.rocks
            .iter()
            .filter(|(_, r)| **r == Rock::Round)
            .map(|(pos, _)| self.rocks.row_n() - pos.r)
            .sum()
    }

    pub fn load_after_spins(mut self, spin_n: usize) -> usize {
        let mut seen = HashMap::new();
        let mut history = Vec::new();
        for ind in 0..spin_n {
            if let Some(cycle_start) = seen.get(&self) {
                let cycle_len = ind - cycle_start;
                let final_ind = cycle_start + (spin_n - cycle_start) % cycle_len;
                let final_platform: &Platform = &history[final_ind];
                return final_platform.north_load();
            }

            seen.insert(self.clone(), ind);
            history.push(self.clone());
            self.spin();
        }

        self.north_load()
    }
}

pub fn read_platform<P: AsRef<Path>>(path: P) -> Result<Platform> {
    let text = common::input::read_text(&path)?;
    Platform::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse platform in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    let mut platform = read_platform(path)?;
    platform.tilt_north();
    Ok(platform.north_load())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_platform(path)?.load_after_spins(SPIN_CYCLE_N))
}
