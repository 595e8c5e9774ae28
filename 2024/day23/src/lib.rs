use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidConnectionText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConnectionText(s) => write!(f, "Invalid text({}) for connection.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct Network {
    names: Vec<String>,
    name_inds: HashMap<String, usize>,
    links: Vec<HashSet<usize>>,
}

impl Network {
    pub fn connect(&mut self, a: &str, b: &str) {
        let a_ind = self.node_ind(a);
        let b_ind = self.node_ind(b);
        if a_ind != b_ind {
            self.links[a_ind].insert(b_ind);
            self.links[b_ind].insert(a_ind);
        }
    }

    fn node_ind(&mut self, name: &str) -> usize {
        if let Some(ind) = self.name_inds.get(name) {
            return *ind;
        }

        let ind = self.names.len();
        self.names.push(name.to_string());
        self.name_inds.insert(name.to_string(), ind);
        self.links.push(HashSet::new());
        ind
    }

    /// Count of three inter-connected computers, at least one of which has name starting with `prefix`.
    pub fn triangle_count_with_prefix(&self, prefix: &str) -> usize {
        let mut count = 0;
        for a in 0..self.names.len() {
            for &b in self.links[a].iter().filter(|b| **b > a) {
                for &c in self.links[b].iter().filter(|c| **c > b) {
                    if self.links[a].contains(&c)
                        && [a, b, c].iter().any(|i| self.names[*i].starts_with(prefix))
                    {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    pub fn password(&self) -> String {
        let mut names = self
            .max_clique()
            .into_iter()
            .map(|i| self.names[i].as_str())
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.join(",")
    }

    pub fn max_clique(&self) -> Vec<usize> {
        let mut best = Vec::new();
        self.bron_kerbosch(
            &mut Vec::new(),
            (0..self.names.len()).collect(),
            HashSet::new(),
            &mut best,
        );
        best
    }

    fn bron_kerbosch(
        &self,
        clique: &mut Vec<usize>,
        mut candidates: HashSet<usize>,
        mut excluded: HashSet<usize>,
        best: &mut Vec<usize>,
    ) {
        if candidates.is_empty() {
            if excluded.is_empty() && clique.len() > best.len() {
                *best = clique.clone();
            }
            return;
        }

        let Some(pivot) = candidates
            .union(&excluded)
            .max_by_key(|n| self.links[**n].intersection(&candidates).count())
            .copied()
        else {
            return;
        };

        let choices = candidates
            .difference(&self.links[pivot])
            .copied()
            .collect::<Vec<_>>();
        for node in choices {
            let neighbors = &self.links[node];
            clique.push(node);
            self.bron_kerbosch(
                clique,
                candidates.intersection(neighbors).copied().collect(),
                excluded.intersection(neighbors).copied().collect(),
                best,
            );
            clique.pop();
            candidates.remove(&node);
            excluded.insert(node);
        }
    }
}

pub fn read_network<P: AsRef<Path>>(path: P) -> Result<Network> {
    let mut network = Network::default();
    for (ind, line) in common::input::read_lines(&path)?.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (a, b) = line
            .split_once('-')
            .ok_or_else(|| Error::InvalidConnectionText(line.to_string()))
            .with_context(|| {
                format!(
                    "Failed to parse connection in line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })?;
        network.connect(a.trim(), b.trim());
    }

    Ok(network)
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_network(path)?.triangle_count_with_prefix("t"))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(read_network(path)?.password())
}
