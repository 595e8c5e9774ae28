use std::{
    collections::{HashMap, VecDeque},
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

pub const CUT_WIRE_N: usize = 3;

#[derive(Debug)]
pub enum Error {
    InvalidLineText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLineText(s) => write!(f, "Invalid text({}) for wiring line.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Number of wires to disconnect
    #[arg(short, long, default_value_t = CUT_WIRE_N)]
    pub wires: usize,
}

#[derive(Debug, Default)]
pub struct Wiring {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    // Neighbor component and wire index.
    links: Vec<Vec<(usize, usize)>>,
    wires: Vec<(usize, usize)>,
}

impl Wiring {
    fn component(&mut self, name: &str) -> usize {
        if let Some(&ind) = self.indices.get(name) {
            return ind;
        }

        let ind = self.names.len();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), ind);
        self.links.push(Vec::new());
        ind
    }

    pub fn connect(&mut self, a: &str, b: &str) {
        let a = self.component(a);
        let b = self.component(b);
        let wire = self.wires.len();
        self.wires.push((a, b));
        self.links[a].push((b, wire));
        self.links[b].push((a, wire));
    }

    pub fn component_n(&self) -> usize {
        self.names.len()
    }

    /// Sizes of the two groups left after disconnecting exactly `cut_n` wires.
    pub fn split_sizes(&self, cut_n: usize) -> Option<(usize, usize)> {
        let source = 0;
        (1..self.component_n()).find_map(|sink| {
            let group = self.min_cut_side(source, sink, cut_n)?;
            let size = group.iter().filter(|in_group| **in_group).count();
            debug!(
                "Cutting {} wire(s) separates {} from {}.",
                cut_n, self.names[source], self.names[sink]
            );
            Some((size, self.component_n() - size))
        })
    }

    /// Components on source side of the minimum cut, if the cut has exactly `cut_n` wires.
    fn min_cut_side(&self, source: usize, sink: usize, cut_n: usize) -> Option<Vec<bool>> {
        // Flow of each wire, positive when it goes from first to second end.
        let mut flows = vec![0i8; self.wires.len()];
        let mut path_n = 0;
        loop {
            let (prevs, reached) = self.residual_search(source, &flows);
            if !reached[sink] {
                return (path_n == cut_n).then_some(reached);
            }

            path_n += 1;
            if path_n > cut_n {
                return None;
            }

            let mut cur = sink;
            while let Some((prev, wire)) = prevs[cur] {
                flows[wire] += if self.wires[wire].0 == prev { 1 } else { -1 };
                cur = prev;
            }
        }
    }

    fn residual_search(
        &self,
        source: usize,
        flows: &[i8],
    ) -> (Vec<Option<(usize, usize)>>, Vec<bool>) {
        let mut prevs = vec![None; self.component_n()];
        let mut reached = vec![false; self.component_n()];
        reached[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(cur) = queue.pop_front() {
            for &(next, wire) in &self.links[cur] {
                let flow = if self.wires[wire].0 == cur {
                    flows[wire]
                } else {
                    -flows[wire]
                };
                if reached[next] || flow >= 1 {
                    continue;
                }

                reached[next] = true;
                prevs[next] = Some((cur, wire));
                queue.push_back(next);
            }
        }

        (prevs, reached)
    }
}

impl TryFrom<&str> for Wiring {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut wiring = Wiring::default();
        for line in value.lines().filter(|l| !l.trim().is_empty()) {
            let invalid = || Error::InvalidLineText(line.to_string());
            let (name, others) = line.split_once(':').ok_or_else(invalid)?;
            let name = name.trim();
            if name.is_empty() {
                return Err(invalid());
            }

            for other in others.split_ascii_whitespace() {
                wiring.connect(name, other);
            }
        }

        Ok(wiring)
    }
}

pub fn read_wiring<P: AsRef<Path>>(path: P) -> Result<Wiring> {
    let text = common::input::read_text(&path)?;
    Wiring::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse wiring diagram in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P, cut_n: usize) -> Result<Option<usize>> {
    Ok(read_wiring(path)?
        .split_sizes(cut_n)
        .map(|(a, b)| a * b))
}
