use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Grid, Position};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct AntennaMap {
    row_n: usize,
    col_n: usize,
    antennas: HashMap<char, Vec<Position>>,
}

impl AntennaMap {
    pub fn antinode_count(&self, resonant_harmonics: bool) -> usize {
        let mut antinodes = HashSet::new();
        for positions in self.antennas.values() {
            for (ind, a) in positions.iter().enumerate() {
                for b in &positions[(ind + 1)..] {
                    self.add_antinodes(a, b, resonant_harmonics, &mut antinodes);
                    self.add_antinodes(b, a, resonant_harmonics, &mut antinodes);
                }
            }
        }

        antinodes.len()
    }

    // Antinodes on the side of `to`, walking away from `from`.
    fn add_antinodes(
        &self,
        from: &Position,
        to: &Position,
        resonant_harmonics: bool,
        antinodes: &mut HashSet<Position>,
    ) {
        let dr = to.r as isize - from.r as isize;
        let dc = to.c as isize - from.c as isize;
        let mut cur = if resonant_harmonics {
            Some(*to)
        } else {
            self.offset(to, dr, dc)
        };
        while let Some(pos) = cur {
            antinodes.insert(pos);
            if !resonant_harmonics {
                break;
            }
            cur = self.offset(&pos, dr, dc);
        }
    }

    fn offset(&self, pos: &Position, dr: isize, dc: isize) -> Option<Position> {
        pos.offset(dr, dc)
            .filter(|p| p.r < self.row_n && p.c < self.col_n)
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<AntennaMap> {
    let text = common::input::read_text(&path)?;
    let chars = Grid::parse_chars(&text).with_context(|| {
        format!(
            "Failed to parse antenna map in given file({}).",
            path.as_ref().display()
        )
    })?;

    let mut antennas = HashMap::<char, Vec<Position>>::new();
    for (pos, c) in chars.iter() {
        if c.is_ascii_alphanumeric() {
            antennas.entry(*c).or_default().push(pos);
        }
    }

    Ok(AntennaMap {
        row_n: chars.row_n(),
        col_n: chars.col_n(),
        antennas,
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_map(path)?.antinode_count(false))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_map(path)?.antinode_count(true))
}
