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
    InvalidCharForMap(char),
    InvalidCharForMove(char),
    NoRobot,
    MultipleRobots(Position, Position),
    MissingSection,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::InvalidCharForMove(c) => write!(f, "Invalid character({}) for move.", c),
            Error::NoRobot => write!(f, "No robot(@) in given map."),
            Error::MultipleRobots(last_pos, pos) => write!(
                f,
                "Expect only one robot, given two({}, {}).",
                last_pos, pos
            ),
            Error::MissingSection => write!(
                f,
                "Expect a map and moves separated by an empty line."
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
pub enum Tile {
    Wall,
    Empty,
    Box,
    BoxLeft,
    BoxRight,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Tile::Wall => '#',
            Tile::Empty => '.',
            Tile::Box => 'O',
            Tile::BoxLeft => '[',
            Tile::BoxRight => ']',
        };
        write!(f, "{}", c)
    }
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    tiles: Grid<Tile>,
    robot: Position,
}

impl TryFrom<&str> for Warehouse {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let chars = Grid::parse_chars(value).map_err(|_| Error::MissingSection)?;
        let mut robot = None;
        for pos in chars.find_all(|c| *c == '@') {
            if let Some(last_pos) = robot {
                return Err(Error::MultipleRobots(last_pos, pos));
            }
            robot = Some(pos);
        }

        let robot = robot.ok_or(Error::NoRobot)?;
        let tiles = chars.try_map(|c| match c {
            '#' => Ok(Tile::Wall),
            '.' | '@' => Ok(Tile::Empty),
            'O' => Ok(Tile::Box),
            other => Err(Error::InvalidCharForMap(*other)),
        })?;

        Ok(Self { tiles, robot })
    }
}

impl Warehouse {
    pub fn widen(&self) -> Self {
        let rows = self
            .tiles
            .rows()
            .map(|row| {
                row.iter()
                    .flat_map(|t| match t {
                        Tile::Box => [Tile::BoxLeft, Tile::BoxRight],
                        other => [*other, *other],
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        Self {
            tiles: Grid::from_rows(rows).unwrap_or_else(|_| self.tiles.clone()),
            robot: Position::new(self.robot.r, self.robot.c * 2),
        }
    }

    pub fn move_robot(&mut self, dir: Direction) -> bool {
        let Some(first) = self.tiles.step(&self.robot, dir) else {
            return false;
        };

        let mut to_move = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![first];
        while let Some(pos) = stack.pop() {
            if !seen.insert(pos) {
                continue;
            }

            let partner = match self.tiles[pos] {
                Tile::Wall => return false,
                Tile::Empty => continue,
                Tile::Box => None,
                Tile::BoxLeft => self.tiles.step(&pos, Direction::East),
                Tile::BoxRight => self.tiles.step(&pos, Direction::West),
            };
            to_move.push(pos);
            stack.extend(partner);
            match self.tiles.step(&pos, dir) {
                Some(next) => stack.push(next),
                None => return false,
            }
        }

        let moved = to_move
            .iter()
            .map(|pos| (*pos, self.tiles[*pos]))
            .collect::<Vec<_>>();
        for (pos, _) in &moved {
            self.tiles[*pos] = Tile::Empty;
        }
        for (pos, tile) in moved {
            if let Some(next) = self.tiles.step(&pos, dir) {
                self.tiles[next] = tile;
            }
        }
        self.robot = first;

        true
    }

    pub fn gps_sum(&self) -> usize {
        self.tiles
            .find_all(|t| matches!(t, Tile::Box | Tile::BoxLeft))
            .iter()
            .map(|pos| 100 * pos.r + pos.c)
            .sum()
    }
}

impl Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.tiles.rows().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                if Position::new(r, c) == self.robot {
                    write!(f, "@")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn read_warehouse<P: AsRef<Path>>(path: P) -> Result<(Warehouse, Vec<Direction>)> {
    let text = common::input::read_text(&path)?;
    let blocks = common::input::split_blocks(&text);
    let [map_block, move_block] = blocks.as_slice() else {
        return Err(Error::MissingSection.into());
    };

    let warehouse = Warehouse::try_from(map_block.as_str())
        .with_context(|| format!("Failed to parse warehouse map({}).", map_block))?;
    let moves = move_block
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::try_from(c).map_err(|_| Error::InvalidCharForMove(c)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((warehouse, moves))
}

pub fn gps_sum_after_moves(mut warehouse: Warehouse, moves: &[Direction]) -> usize {
    for dir in moves {
        warehouse.move_robot(*dir);
    }

    warehouse.gps_sum()
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    let (warehouse, moves) = read_warehouse(path)?;
    Ok(gps_sum_after_moves(warehouse, &moves))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    let (warehouse, moves) = read_warehouse(path)?;
    Ok(gps_sum_after_moves(warehouse.widen(), &moves))
}
