use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{self, Grid};

#[derive(Debug)]
pub enum Error {
    InvalidGrid(grid::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrid(e) => write!(f, "Invalid image: {}", e),
        }
    }
}

impl error::Error for Error {}

pub const YOUNG_EXPANSION: u64 = 2;
pub const OLD_EXPANSION: u64 = 1_000_000;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Times each empty row or column grows into
    #[arg(long)]
    pub factor: Option<u64>,
}

pub struct Image {
    galaxy_rows: Vec<u64>,
    galaxy_cols: Vec<u64>,
}

impl TryFrom<&str> for Image {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let pixels = Grid::parse_with(value, |c| match c {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        })
        .map_err(Error::InvalidGrid)?;
        let galaxies = pixels.find_all(|p| *p);

        Ok(Self {
            galaxy_rows: galaxies.iter().map(|p| p.r as u64).collect(),
            galaxy_cols: galaxies.iter().map(|p| p.c as u64).collect(),
        })
    }
}

/// Sum of distances between each pair of coordinates, after empty lines grow `factor` times.
fn expanded_distance_sum(coords: &[u64], factor: u64) -> u64 {
    let mut coords = coords.to_vec();
    coords.sort_unstable();

    let mut expanded = Vec::with_capacity(coords.len());
    let mut shift = 0;
    for (ind, coord) in coords.iter().enumerate() {
        if ind > 0 {
            let gap = coord - coords[ind - 1];
            if gap > 1 {
                shift += (gap - 1) * (factor - 1);
            }
        }
        expanded.push(coord + shift);
    }

    // Each coordinate is subtracted by all before it.
    let mut sum = 0;
    let mut prefix_sum = 0;
    for (ind, coord) in expanded.iter().enumerate() {
        sum += coord * ind as u64 - prefix_sum;
        prefix_sum += coord;
    }

    sum
}

impl Image {
    pub fn distance_sum(&self, factor: u64) -> u64 {
        let factor = factor.max(1);
        expanded_distance_sum(&self.galaxy_rows, factor)
            + expanded_distance_sum(&self.galaxy_cols, factor)
    }
}

pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let text = common::input::read_text(&path)?;
    Image::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse image in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P, factor: u64) -> Result<u64> {
    Ok(read_image(path)?.distance_sum(factor))
}

pub fn part2<P: AsRef<Path>>(path: P, factor: u64) -> Result<u64> {
    part1(path, factor)
}
