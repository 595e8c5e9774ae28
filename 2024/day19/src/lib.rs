use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoPatternLine,
    EmptyPattern,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoPatternLine => write!(f, "Can't find towel patterns."),
            Error::EmptyPattern => write!(f, "Towel pattern can't be empty."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub struct Onsen {
    patterns: Vec<String>,
    designs: Vec<String>,
}

impl TryFrom<&str> for Onsen {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut lines = value.lines();
        let pattern_line = lines.next().ok_or(Error::NoPatternLine)?;
        let patterns = pattern_line
            .split(',')
            .map(|s| s.trim().to_string())
            .collect::<Vec<_>>();
        if patterns.iter().any(|p| p.is_empty()) {
            return Err(Error::EmptyPattern);
        }

        let designs = lines
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect();

        Ok(Self { patterns, designs })
    }
}

impl Onsen {
    pub fn possible_design_count(&self) -> usize {
        self.designs
            .iter()
            .filter(|d| self.arrangement_count(d) > 0)
            .count()
    }

    pub fn arrangement_count_sum(&self) -> usize {
        self.designs.iter().map(|d| self.arrangement_count(d)).sum()
    }

    /// Number of ways to build given design, where ways[i] counts arrangements of design[i..].
    pub fn arrangement_count(&self, design: &str) -> usize {
        let len = design.len();
        let mut ways = vec![0usize; len + 1];
        ways[len] = 1;
        for start in (0..len).rev() {
            let rest = &design[start..];
            ways[start] = self
                .patterns
                .iter()
                .filter(|p| rest.starts_with(p.as_str()))
                .map(|p| ways[start + p.len()])
                .sum();
        }

        ways[0]
    }
}

pub fn read_onsen<P: AsRef<Path>>(path: P) -> Result<Onsen> {
    let text = common::input::read_text(&path)?;
    Onsen::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse towels and designs in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_onsen(path)?.possible_design_count())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_onsen(path)?.arrangement_count_sum())
}
