use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Error {
    InvalidNumber(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidNumber(s) => write!(f, "Invalid text({}) for number.", s),
        }
    }
}

impl error::Error for Error {}

pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            l.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
        })
        .collect()
}

/// Splits text into blocks separated by blank lines, dropping empty blocks.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut cur_lines: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !cur_lines.is_empty() {
                blocks.push(cur_lines.join("\n"));
                cur_lines.clear();
            }
        } else {
            cur_lines.push(line);
        }
    }

    if !cur_lines.is_empty() {
        blocks.push(cur_lines.join("\n"));
    }

    blocks
}

pub fn parse_numbers<T: FromStr>(text: &str) -> std::result::Result<Vec<T>, Error> {
    text.split_ascii_whitespace()
        .map(|s| s.parse::<T>().map_err(|_| Error::InvalidNumber(s.to_string())))
        .collect()
}
