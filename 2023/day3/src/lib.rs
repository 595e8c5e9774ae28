use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{self, Grid, Position, EIGHT_OFFSETS};

#[derive(Debug)]
pub enum Error {
    InvalidGrid(grid::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid engine schematic: {}", e),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
struct PartNumber {
    value: u32,
    row: usize,
    cols: std::ops::Range<usize>,
}

pub struct Schematic {
    cells: Grid<char>,
    numbers: Vec<PartNumber>,
}

impl TryFrom<&str> for Schematic {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let cells = Grid::parse_chars(value).map_err(Error::InvalidGrid)?;
        let mut numbers = Vec::new();
        for (r, row) in cells.rows().enumerate() {
            let mut c = 0;
            while c < row.len() {
                if !row[c].is_ascii_digit() {
                    c += 1;
                    continue;
                }

                let start = c;
                let mut value = 0;
                while let Some(d) = row.get(c).and_then(|ch| ch.to_digit(10)) {
                    value = value * 10 + d;
                    c += 1;
                }
                numbers.push(PartNumber {
                    value,
                    row: r,
                    cols: start..c,
                });
            }
        }

        Ok(Self { cells, numbers })
    }
}

fn is_symbol(c: char) -> bool {
    c != '.' && !c.is_ascii_digit()
}

impl Schematic {
    fn adjacent_positions(&self, number: &PartNumber) -> Vec<Position> {
        let mut positions = Vec::new();
        for c in number.cols.clone() {
            let pos = Position::new(number.row, c);
            for (dr, dc) in EIGHT_OFFSETS {
                if let Some(adj) = self.cells.offset(&pos, dr, dc) {
                    if adj.r != number.row || !number.cols.contains(&adj.c) {
                        positions.push(adj);
                    }
                }
            }
        }

        positions.sort_unstable();
        positions.dedup();
        positions
    }

    pub fn part_number_sum(&self) -> u32 {
        self.numbers
            .iter()
            .filter(|n| {
                self.adjacent_positions(n)
                    .iter()
                    .any(|p| is_symbol(self.cells[*p]))
            })
            .map(|n| n.value)
            .sum()
    }

    pub fn gear_ratio_sum(&self) -> u32 {
        let mut gear_numbers: HashMap<Position, Vec<u32>> = HashMap::new();
        for number in &self.numbers {
            for pos in self.adjacent_positions(number) {
                if self.cells[pos] == '*' {
                    gear_numbers.entry(pos).or_default().push(number.value);
                }
            }
        }

        gear_numbers
            .values()
            .filter(|ns| ns.len() == 2)
            .map(|ns| ns[0] * ns[1])
            .sum()
    }
}

pub fn read_schematic<P: AsRef<Path>>(path: P) -> Result<Schematic> {
    let text = common::input::read_text(&path)?;
    Schematic::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse engine schematic in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u32> {
    Ok(read_schematic(path)?.part_number_sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u32> {
    Ok(read_schematic(path)?.gear_ratio_sum())
}
