use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Direction, Grid, Position};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct Region {
    area: usize,
    perimeter: usize,
    side_n: usize,
}

impl Region {
    pub fn price(&self) -> usize {
        self.area * self.perimeter
    }

    pub fn bulk_price(&self) -> usize {
        self.area * self.side_n
    }
}

#[derive(Debug)]
pub struct Garden {
    plants: Grid<char>,
}

impl Garden {
    pub fn regions(&self) -> Vec<Region> {
        let mut visited = Grid::new(self.plants.row_n(), self.plants.col_n(), false);
        let mut regions = Vec::new();
        for start in self.plants.positions() {
            if visited[start] {
                continue;
            }

            let plant = self.plants[start];
            let mut region = Region::default();
            let mut stack = vec![start];
            visited[start] = true;
            while let Some(pos) = stack.pop() {
                region.area += 1;
                region.side_n += self.corner_count(&pos, plant);
                for dir in Direction::all() {
                    match self.plants.step(&pos, dir) {
                        Some(next) if self.plants[next] == plant => {
                            if !visited[next] {
                                visited[next] = true;
                                stack.push(next);
                            }
                        }
                        _ => region.perimeter += 1,
                    }
                }
            }

            regions.push(region);
        }

        regions
    }

    // A region has as many sides as corners.
    fn corner_count(&self, pos: &Position, plant: char) -> usize {
        Direction::all()
            .into_iter()
            .filter(|dir| {
                let side_dir = dir.turn_clockwise();
                let (dr0, dc0) = dir.offset();
                let (dr1, dc1) = side_dir.offset();
                let same0 = self.is_plant(pos, dr0, dc0, plant);
                let same1 = self.is_plant(pos, dr1, dc1, plant);
                let same_diagonal = self.is_plant(pos, dr0 + dr1, dc0 + dc1, plant);
                (!same0 && !same1) || (same0 && same1 && !same_diagonal)
            })
            .count()
    }

    fn is_plant(&self, pos: &Position, dr: isize, dc: isize, plant: char) -> bool {
        self.plants
            .offset(pos, dr, dc)
            .is_some_and(|p| self.plants[p] == plant)
    }
}

pub fn read_garden<P: AsRef<Path>>(path: P) -> Result<Garden> {
    let text = common::input::read_text(&path)?;
    let plants = Grid::parse_chars(&text).with_context(|| {
        format!(
            "Failed to parse garden map in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(Garden { plants })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_garden(path)?.regions().iter().map(Region::price).sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_garden(path)?
        .regions()
        .iter()
        .map(Region::bulk_price)
        .sum())
}
