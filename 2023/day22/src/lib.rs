use std::{
    collections::{HashMap, HashSet, VecDeque},
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidBrickText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBrickText(s) => write!(f, "Invalid text({}) for brick.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct Brick {
    min: [u32; 3],
    max: [u32; 3],
}

impl TryFrom<&str> for Brick {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let invalid = || Error::InvalidBrickText(value.to_string());
        let (a_text, b_text) = value.trim().split_once('~').ok_or_else(invalid)?;
        let parse_end = |s: &str| -> Result<[u32; 3], Error> {
            let coords = s
                .split(',')
                .map(|n| n.trim().parse::<u32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            coords.try_into().map_err(|_| invalid())
        };
        let a = parse_end(a_text)?;
        let b = parse_end(b_text)?;

        Ok(Self {
            min: [0, 1, 2].map(|i| a[i].min(b[i])),
            max: [0, 1, 2].map(|i| a[i].max(b[i])),
        })
    }
}

impl Brick {
    fn footprint(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.min[0]..=self.max[0])
            .flat_map(move |x| (self.min[1]..=self.max[1]).map(move |y| (x, y)))
    }

    fn height(&self) -> u32 {
        self.max[2] - self.min[2] + 1
    }
}

pub struct SettledStack {
    supporters: Vec<HashSet<usize>>,
    supporting: Vec<HashSet<usize>>,
}

impl SettledStack {
    pub fn settle(mut bricks: Vec<Brick>) -> Self {
        bricks.sort_by_key(|b| b.min[2]);
        let brick_n = bricks.len();
        let mut supporters = vec![HashSet::new(); brick_n];
        let mut supporting = vec![HashSet::new(); brick_n];
        // Top height and brick index of each settled column.
        let mut tops: HashMap<(u32, u32), (u32, usize)> = HashMap::new();
        for (ind, brick) in bricks.iter().enumerate() {
            let rest_height = brick
                .footprint()
                .filter_map(|xy| tops.get(&xy).map(|(z, _)| *z))
                .max()
                .unwrap_or(0);
            for xy in brick.footprint() {
                if let Some((z, below)) = tops.get(&xy) {
                    if *z == rest_height && rest_height > 0 {
                        supporters[ind].insert(*below);
                        supporting[*below].insert(ind);
                    }
                }
            }

            let top = rest_height + brick.height();
            for xy in brick.footprint() {
                tops.insert(xy, (top, ind));
            }
        }

        Self {
            supporters,
            supporting,
        }
    }

    pub fn safe_brick_count(&self) -> usize {
        self.supporting
            .iter()
            .filter(|above| above.iter().all(|a| self.supporters[*a].len() > 1))
            .count()
    }

    fn falling_count(&self, removed: usize) -> usize {
        let mut fallen = HashSet::from([removed]);
        let mut queue = VecDeque::from([removed]);
        while let Some(ind) = queue.pop_front() {
            for above in &self.supporting[ind] {
                if !fallen.contains(above)
                    && self.supporters[*above].iter().all(|s| fallen.contains(s))
                {
                    fallen.insert(*above);
                    queue.push_back(*above);
                }
            }
        }

        fallen.len() - 1
    }

    pub fn chain_reaction_sum(&self) -> usize {
        (0..self.supporters.len())
            .map(|ind| self.falling_count(ind))
            .sum()
    }
}

pub fn read_bricks<P: AsRef<Path>>(path: P) -> Result<Vec<Brick>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Brick::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse bricks in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(SettledStack::settle(read_bricks(path)?).safe_brick_count())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(SettledStack::settle(read_bricks(path)?).chain_reaction_sum())
}
