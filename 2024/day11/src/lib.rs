use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(short, long)]
    pub blink_count: Option<usize>,
}

#[derive(Debug)]
pub struct StoneLine {
    counts: HashMap<u64, usize>,
}

impl TryFrom<&str> for StoneLine {
    type Error = common::input::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut counts = HashMap::new();
        for n in common::input::parse_numbers::<u64>(value)? {
            *counts.entry(n).or_insert(0) += 1;
        }

        Ok(Self { counts })
    }
}

impl StoneLine {
    pub fn blink(&mut self) {
        let mut next_counts = HashMap::with_capacity(self.counts.len());
        for (n, count) in self.counts.drain() {
            if n == 0 {
                *next_counts.entry(1).or_insert(0) += count;
            } else if let Some((left, right)) = split_digits(n) {
                *next_counts.entry(left).or_insert(0) += count;
                *next_counts.entry(right).or_insert(0) += count;
            } else {
                *next_counts.entry(n * 2024).or_insert(0) += count;
            }
        }

        self.counts = next_counts;
    }

    pub fn count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count_after(mut self, blink_n: usize) -> usize {
        for _ in 0..blink_n {
            self.blink();
        }

        self.count()
    }
}

fn split_digits(n: u64) -> Option<(u64, u64)> {
    let mut digits_n = 1u32;
    let mut least_large_10_power = 10;
    while least_large_10_power <= n {
        least_large_10_power *= 10;
        digits_n += 1;
    }

    if digits_n % 2 == 0 {
        let split_factor = 10u64.pow(digits_n / 2);
        Some((n / split_factor, n % split_factor))
    } else {
        None
    }
}

pub fn read_stones<P: AsRef<Path>>(path: P) -> Result<StoneLine> {
    let text = common::input::read_text(&path)?;
    StoneLine::try_from(text.as_str())
        .with_context(|| format!("Failed to parse stones from given text({}).", text.trim()))
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_stones(path)?.count_after(25))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_stones(path)?.count_after(75))
}
