use std::{
    cmp::Reverse,
    collections::BinaryHeap,
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
            Error::InvalidGrid(e) => write!(f, "Invalid heat loss map: {}", e),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Crucible {
    min_run: usize,
    max_run: usize,
}

pub const NORMAL_CRUCIBLE: Crucible = Crucible {
    min_run: 1,
    max_run: 3,
};
pub const ULTRA_CRUCIBLE: Crucible = Crucible {
    min_run: 4,
    max_run: 10,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct State {
    pos: Position,
    dir: Direction,
    run: usize,
}

pub struct HeatMap {
    losses: Grid<u32>,
}

impl TryFrom<&str> for HeatMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let losses = Grid::parse_with(value, |c| c.to_digit(10)).map_err(Error::InvalidGrid)?;
        Ok(Self { losses })
    }
}

impl HeatMap {
    fn state_ind(&self, state: &State, crucible: &Crucible) -> usize {
        let pos_ind = state.pos.r * self.losses.col_n() + state.pos.c;
        (pos_ind * 4 + state.dir.index()) * (crucible.max_run + 1) + state.run
    }

    fn next_states(&self, state: &State, crucible: &Crucible) -> Vec<State> {
        let mut moves = Vec::with_capacity(3);
        if state.run < crucible.max_run {
            moves.push((state.dir, state.run + 1));
        }
        if state.run >= crucible.min_run {
            moves.push((state.dir.turn_clockwise(), 1));
            moves.push((state.dir.turn_counterclockwise(), 1));
        }

        moves
            .into_iter()
            .filter_map(|(dir, run)| {
                self.losses
                    .step(&state.pos, dir)
                    .map(|pos| State { pos, dir, run })
            })
            .collect()
    }

    pub fn min_heat_loss(&self, crucible: &Crucible) -> Option<u32> {
        let end = Position::new(self.losses.row_n() - 1, self.losses.col_n() - 1);
        let state_n = self.losses.row_n() * self.losses.col_n() * 4 * (crucible.max_run + 1);
        let mut losses = vec![u32::MAX; state_n];
        let mut queue = BinaryHeap::new();
        for dir in [Direction::East, Direction::South] {
            let state = State {
                pos: Position::new(0, 0),
                dir,
                run: 0,
            };
            losses[self.state_ind(&state, crucible)] = 0;
            queue.push(Reverse((0, state)));
        }

        while let Some(Reverse((loss, state))) = queue.pop() {
            if loss > losses[self.state_ind(&state, crucible)] {
                continue;
            }
            if state.pos == end && state.run >= crucible.min_run {
                return Some(loss);
            }

            for next in self.next_states(&state, crucible) {
                let next_loss = loss + self.losses[next.pos];
                let next_ind = self.state_ind(&next, crucible);
                if next_loss < losses[next_ind] {
                    losses[next_ind] = next_loss;
                    queue.push(Reverse((next_loss, next)));
                }
            }
        }

        None
    }
}

pub fn read_heat_map<P: AsRef<Path>>(path: P) -> Result<HeatMap> {
    let text = common::input::read_text(&path)?;
    HeatMap::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse heat loss map in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<Option<u32>> {
    Ok(read_heat_map(path)?.min_heat_loss(&NORMAL_CRUCIBLE))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<u32>> {
    Ok(read_heat_map(path)?.min_heat_loss(&ULTRA_CRUCIBLE))
}
