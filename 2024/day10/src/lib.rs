use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Grid, Position};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const TRAIL_TOP: u8 = 9;

#[derive(Debug)]
pub struct TopoMap {
    heights: Grid<u8>,
}

impl TopoMap {
    pub fn trailheads(&self) -> Vec<Position> {
        self.heights.find_all(|h| *h == 0)
    }

    pub fn score(&self, trailhead: &Position) -> usize {
        let mut tops = HashSet::new();
        let mut stack = vec![*trailhead];
        while let Some(pos) = stack.pop() {
            let h = self.heights[pos];
            if h == TRAIL_TOP {
                tops.insert(pos);
                continue;
            }

            stack.extend(self.uphill_neighbors(&pos, h));
        }

        tops.len()
    }

    pub fn rating(&self, trailhead: &Position) -> usize {
        let mut ratings = Grid::new(self.heights.row_n(), self.heights.col_n(), None);
        self.rating_recur(trailhead, &mut ratings)
    }

    fn rating_recur(&self, pos: &Position, ratings: &mut Grid<Option<usize>>) -> usize {
        if let Some(rating) = ratings[*pos] {
            return rating;
        }

        let h = self.heights[*pos];
        let rating = if h == TRAIL_TOP {
            1
        } else {
            self.uphill_neighbors(pos, h)
                .collect::<Vec<_>>()
                .iter()
                .map(|next| self.rating_recur(next, ratings))
                .sum()
        };
        ratings[*pos] = Some(rating);

        rating
    }

    fn uphill_neighbors<'a>(
        &'a self,
        pos: &Position,
        h: u8,
    ) -> impl Iterator<Item = Position> + 'a {
        self.heights
            .neighbors(pos)
            .filter(move |next| self.heights[*next] == h + 1)
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<TopoMap> {
    let text = common::input::read_text(&path)?;
    let heights = Grid::parse_with(&text, |c| c.to_digit(10).map(|d| d as u8)).with_context(
        || {
            format!(
                "Failed to parse topographic map in given file({}).",
                path.as_ref().display()
            )
        },
    )?;

    Ok(TopoMap { heights })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    let map = read_map(path)?;
    Ok(map.trailheads().iter().map(|t| map.score(t)).sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    let map = read_map(path)?;
    Ok(map.trailheads().iter().map(|t| map.rating(t)).sum())
}
