use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Direction, Grid, Position};

#[derive(Debug)]
pub enum Error {
    NoEntrance,
    NoExit,
    TooManyJunctions(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoEntrance => write!(f, "No path tile in the top row of the map."),
            Error::NoExit => write!(f, "No path tile in the bottom row of the map."),
            Error::TooManyJunctions(n) => {
                write!(f, "Too many junctions({}) in the map, at most 64.", n)
            }
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
    Path,
    Forest,
    Slope(Direction),
}

impl Tile {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Tile::Path),
            '#' => Some(Tile::Forest),
            other => Direction::try_from(other).ok().map(Tile::Slope),
        }
    }
}

pub struct HikingMap {
    tiles: Grid<Tile>,
    start: Position,
    end: Position,
}

impl TryFrom<&str> for HikingMap {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let tiles = Grid::parse_with(value, Tile::from_char)?;
        let col_of_path = |r: usize| tiles.row(r).iter().position(|t| *t == Tile::Path);
        let start = col_of_path(0)
            .map(|c| Position::new(0, c))
            .ok_or(Error::NoEntrance)?;
        let last_r = tiles.row_n() - 1;
        let end = col_of_path(last_r)
            .map(|c| Position::new(last_r, c))
            .ok_or(Error::NoExit)?;

        Ok(Self { tiles, start, end })
    }
}

struct Trail {
    to: usize,
    len: usize,
}

impl HikingMap {
    fn can_move(&self, from: &Position, dir: Direction, slippery: bool) -> Option<Position> {
        if slippery && matches!(self.tiles[*from], Tile::Slope(s) if s != dir) {
            return None;
        }

        let to = self.tiles.step(from, dir)?;
        match self.tiles[to] {
            Tile::Forest => None,
            Tile::Slope(s) if slippery && s != dir => None,
            _ => Some(to),
        }
    }

    fn open_neighbor_n(&self, pos: &Position) -> usize {
        self.tiles
            .neighbors(pos)
            .filter(|p| self.tiles[*p] != Tile::Forest)
            .count()
    }

    fn junctions(&self) -> Vec<Position> {
        let mut junctions = vec![self.start, self.end];
        junctions.extend(
            self.tiles
                .find_all(|t| *t != Tile::Forest)
                .into_iter()
                .filter(|p| self.open_neighbor_n(p) > 2),
        );
        junctions
    }

    /// Follow the corridor leaving junction in given direction until next junction.
    fn follow(
        &self,
        from: &Position,
        dir: Direction,
        junction_inds: &HashMap<Position, usize>,
        slippery: bool,
    ) -> Option<Trail> {
        let mut cur = self.can_move(from, dir, slippery)?;
        let mut came_from = dir.reverse();
        let mut len = 1;
        loop {
            if let Some(&to) = junction_inds.get(&cur) {
                return Some(Trail { to, len });
            }

            let (next_dir, next) = Direction::all()
                .into_iter()
                .filter(|d| *d != came_from)
                .find_map(|d| self.can_move(&cur, d, slippery).map(|p| (d, p)))?;
            came_from = next_dir.reverse();
            cur = next;
            len += 1;
        }
    }

    pub fn longest_hike(&self, slippery: bool) -> Result<Option<usize>, Error> {
        let junctions = self.junctions();
        if junctions.len() > 64 {
            return Err(Error::TooManyJunctions(junctions.len()));
        }

        let junction_inds = junctions
            .iter()
            .enumerate()
            .map(|(ind, pos)| (*pos, ind))
            .collect::<HashMap<_, _>>();
        let trails = junctions
            .iter()
            .map(|pos| {
                Direction::all()
                    .into_iter()
                    .filter_map(|d| self.follow(pos, d, &junction_inds, slippery))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        // Junction 0 is the start, 1 is the end.
        Ok(longest_from(0, 1, 1, &trails))
    }
}

fn longest_from(from: usize, to: usize, visited: u64, trails: &[Vec<Trail>]) -> Option<usize> {
    if from == to {
        return Some(0);
    }

    trails[from]
        .iter()
        .filter(|t| visited & (1 << t.to) == 0)
        .filter_map(|t| longest_from(t.to, to, visited | (1 << t.to), trails).map(|l| l + t.len))
        .max()
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<HikingMap> {
    let text = common::input::read_text(&path)?;
    HikingMap::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse hiking map in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_map(path)?.longest_hike(true)?)
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_map(path)?.longest_hike(false)?)
}
