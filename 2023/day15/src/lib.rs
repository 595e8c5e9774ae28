use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidStepText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepText(s) => {
                write!(f, "Invalid text({}) for initialization step.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn hash(s: &str) -> usize {
    s.bytes().fold(0, |cur, b| (cur + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Remove,
    Insert(usize),
}

#[derive(Debug, Clone)]
pub struct Step {
    label: String,
    op: Operation,
}

impl TryFrom<&str> for Step {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        if let Some(label) = value.strip_suffix('-') {
            return Ok(Self {
                label: label.to_string(),
                op: Operation::Remove,
            });
        }

        let (label, focal_text) = value
            .split_once('=')
            .ok_or_else(|| Error::InvalidStepText(value.to_string()))?;
        let focal_len = focal_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidStepText(value.to_string()))?;

        Ok(Self {
            label: label.to_string(),
            op: Operation::Insert(focal_len),
        })
    }
}

pub struct Boxes {
    // Lenses of (label, focal length) in each box, front first.
    lenses: Vec<Vec<(String, usize)>>,
}

impl Boxes {
    pub fn new() -> Self {
        Self {
            lenses: vec![Vec::new(); 256],
        }
    }

    pub fn apply(&mut self, step: &Step) {
        let lenses = &mut self.lenses[hash(&step.label)];
        let lens_ind = lenses.iter().position(|(l, _)| *l == step.label);
        match (&step.op, lens_ind) {
            (Operation::Remove, Some(ind)) => {
                lenses.remove(ind);
            }
            (Operation::Remove, None) => (),
            (Operation::Insert(focal_len), Some(ind)) => lenses[ind].1 = *focal_len,
            (Operation::Insert(focal_len), None) => {
                lenses.push((step.label.clone(), *focal_len));
            }
        }
    }

    pub fn focusing_power(&self) -> usize {
        self.lenses
            .iter()
            .enumerate()
            .flat_map(|(box_ind, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot_ind, (_, focal_len))| {
                        (box_ind + 1) * (slot_ind + 1) * focal_len
                    })
            })
            .sum()
    }
}

impl Default for Boxes {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_step_texts<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = common::input::read_text(&path)?;
    Ok(text
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_step_texts(path)?.iter().map(|s| hash(s)).sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    let mut boxes = Boxes::new();
    for text in read_step_texts(&path)? {
        let step = Step::try_from(text.as_str()).with_context(|| {
            format!(
                "Failed to parse initialization step in given file({}).",
                path.as_ref().display()
            )
        })?;
        boxes.apply(&step);
    }

    Ok(boxes.focusing_power())
}
