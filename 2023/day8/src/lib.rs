use std::{
    collections::HashMap,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    NoInstructions,
    InvalidInstruction(char),
    InvalidNodeText(String),
    UnknownNode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoInstructions => write!(f, "Can't find left/right instructions."),
            Error::InvalidInstruction(c) => write!(f, "Invalid instruction({}).", c),
            Error::InvalidNodeText(s) => write!(f, "Invalid text({}) for node.", s),
            Error::UnknownNode(s) => write!(f, "Unknown node({}) in network.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub struct Network {
    instructions: Vec<bool>,
    names: Vec<String>,
    // Left and right node indices of each node.
    links: Vec<[usize; 2]>,
}

impl TryFrom<&str> for Network {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static NODE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\w+)\s*=\s*\((\w+),\s*(\w+)\)$").unwrap());

        let mut lines = value.lines().map(|l| l.trim()).filter(|l| !l.is_empty());
        let instructions = lines
            .next()
            .ok_or(Error::NoInstructions)?
            .chars()
            .map(|c| match c {
                'L' => Ok(false),
                'R' => Ok(true),
                other => Err(Error::InvalidInstruction(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let node_texts = lines
            .map(|l| {
                NODE_PATTERN
                    .captures(l)
                    .map(|caps| [1, 2, 3].map(|i| caps[i].to_string()))
                    .ok_or_else(|| Error::InvalidNodeText(l.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let names = node_texts
            .iter()
            .map(|[name, _, _]| name.clone())
            .collect::<Vec<_>>();
        let name_inds = names
            .iter()
            .enumerate()
            .map(|(ind, name)| (name.as_str(), ind))
            .collect::<HashMap<_, _>>();
        let find = |name: &str| {
            name_inds
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownNode(name.to_string()))
        };
        let links = node_texts
            .iter()
            .map(|[_, left, right]| Ok([find(left)?, find(right)?]))
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            instructions,
            names,
            links,
        })
    }
}

impl Network {
    fn node_ind(&self, name: &str) -> Result<usize, Error> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    /// Steps from given node until reaching one that satisfies `is_end`, `None` if never.
    fn steps_until<F>(&self, start: usize, is_end: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        if self.instructions.is_empty() {
            return None;
        }

        // Same node at the same instruction means a loop without end.
        let limit = self.names.len() * self.instructions.len();
        let mut cur = start;
        for (step, go_right) in self.instructions.iter().cycle().enumerate().take(limit) {
            cur = self.links[cur][usize::from(*go_right)];
            if is_end(&self.names[cur]) {
                return Some(step + 1);
            }
        }

        None
    }

    pub fn steps_to_zzz(&self) -> Result<Option<usize>, Error> {
        let start = self.node_ind("AAA")?;
        let end = self.node_ind("ZZZ")?;
        if start == end {
            return Ok(Some(0));
        }

        Ok(self.steps_until(start, |n| n == "ZZZ"))
    }

    /// Steps for all ghosts to be on nodes ending with Z, assuming each one runs in cycles.
    pub fn ghost_steps(&self) -> Option<usize> {
        let cycles = (0..self.names.len())
            .filter(|i| self.names[*i].ends_with('A'))
            .map(|i| self.steps_until(i, |n| n.ends_with('Z')))
            .collect::<Option<Vec<_>>>()?;
        if cycles.is_empty() {
            return None;
        }

        Some(common::math::lcm_all(cycles))
    }
}

pub fn read_network<P: AsRef<Path>>(path: P) -> Result<Network> {
    let text = common::input::read_text(&path)?;
    Network::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse network in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_network(path)?.steps_to_zzz()?)
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_network(path)?.ghost_steps())
}
