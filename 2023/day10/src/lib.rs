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
    NoStart,
    StartNotInLoop(usize),
    BrokenLoop(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid pipe map: {}", e),
            Error::NoStart => write!(f, "Can't find the start tile(S)."),
            Error::StartNotInLoop(n) => write!(
                f,
                "Start tile should connect to 2 pipes, but connects to {}.",
                n
            ),
            Error::BrokenLoop(p) => write!(f, "Pipe loop breaks at {}.", p),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

fn connections(tile: char) -> &'static [Direction] {
    use Direction::*;
    match tile {
        '|' => &[North, South],
        '-' => &[East, West],
        'L' => &[North, East],
        'J' => &[North, West],
        '7' => &[South, West],
        'F' => &[East, South],
        _ => &[],
    }
}

fn tile_of(dirs: [Direction; 2]) -> char {
    ['|', '-', 'L', 'J', '7', 'F']
        .into_iter()
        .find(|t| {
            let conns = connections(*t);
            conns.contains(&dirs[0]) && conns.contains(&dirs[1])
        })
        .unwrap_or('.')
}

pub struct PipeMap {
    tiles: Grid<char>,
    // Loop tiles from the start tile, in walking order.
    pipe_loop: Vec<Position>,
}

impl TryFrom<&str> for PipeMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut tiles = Grid::parse_chars(value).map_err(Error::InvalidGrid)?;
        let start = tiles.find(|c| *c == 'S').ok_or(Error::NoStart)?;
        let start_dirs = Direction::all()
            .into_iter()
            .filter(|d| {
                tiles
                    .step(&start, *d)
                    .is_some_and(|p| connections(tiles[p]).contains(&d.reverse()))
            })
            .collect::<Vec<_>>();
        let [first_dir, second_dir] = start_dirs[..] else {
            return Err(Error::StartNotInLoop(start_dirs.len()));
        };
        tiles[start] = tile_of([first_dir, second_dir]);

        let mut pipe_loop = vec![start];
        let mut pos = start;
        let mut dir = first_dir;
        loop {
            let next = tiles
                .step(&pos, dir)
                .filter(|p| connections(tiles[*p]).contains(&dir.reverse()))
                .ok_or(Error::BrokenLoop(pos))?;
            pos = next;
            if pos == start {
                break;
            }

            pipe_loop.push(pos);
            dir = connections(tiles[pos])
                .iter()
                .find(|d| **d != dir.reverse())
                .copied()
                .ok_or(Error::BrokenLoop(pos))?;
        }

        Ok(Self { tiles, pipe_loop })
    }
}

impl PipeMap {
    pub fn farthest_steps(&self) -> usize {
        self.pipe_loop.len() / 2
    }

    /// Tiles enclosed by the loop, where crossing a north-connected loop tile flips in and out.
    pub fn enclosed_tile_count(&self) -> usize {
        let mut on_loop = Grid::new(self.tiles.row_n(), self.tiles.col_n(), false);
        for pos in &self.pipe_loop {
            on_loop[*pos] = true;
        }

        let mut count = 0;
        for r in 0..self.tiles.row_n() {
            let mut inside = false;
            for c in 0..self.tiles.col_n() {
                let pos = Position::new(r, c);
                if on_loop[pos] {
                    if connections(self.tiles[pos]).contains(&Direction::North) {
                        inside = !inside;
                    }
                } else if inside {
                    count += 1;
                }
            }
        }

        count
    }
}

pub fn read_pipe_map<P: AsRef<Path>>(path: P) -> Result<PipeMap> {
    let text = common::input::read_text(&path)?;
    PipeMap::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse pipe map in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_pipe_map(path)?.farthest_steps())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_pipe_map(path)?.enclosed_tile_count())
}
