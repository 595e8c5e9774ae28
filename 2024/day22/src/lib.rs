use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

pub const SECRET_COUNT: usize = 2000;
const PRUNE_MASK: u64 = (1 << 24) - 1;
const CHANGE_KIND_N: usize = 19;
const SEQUENCE_KIND_N: usize = CHANGE_KIND_N * CHANGE_KIND_N * CHANGE_KIND_N * CHANGE_KIND_N;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn next_secret(secret: u64) -> u64 {
    let secret = ((secret << 6) ^ secret) & PRUNE_MASK;
    let secret = ((secret >> 5) ^ secret) & PRUNE_MASK;
    ((secret << 11) ^ secret) & PRUNE_MASK
}

pub fn nth_secret(secret: u64, n: usize) -> u64 {
    (0..n).fold(secret, |s, _| next_secret(s))
}

pub fn secret_sum(secrets: &[u64]) -> u64 {
    secrets.iter().map(|s| nth_secret(*s, SECRET_COUNT)).sum()
}

/// Most bananas to get by a single sequence of four price changes.
pub fn most_bananas(secrets: &[u64]) -> usize {
    let mut totals = vec![0usize; SEQUENCE_KIND_N];
    // Buyer index plus one that last saw each sequence.
    let mut seen_by = vec![0usize; SEQUENCE_KIND_N];
    for (buyer_ind, secret) in secrets.iter().enumerate() {
        let mut secret = *secret;
        let mut price = (secret % 10) as usize;
        let mut seq_ind = 0;
        for n in 0..SECRET_COUNT {
            secret = next_secret(secret);
            let next_price = (secret % 10) as usize;
            let change = next_price + 9 - price;
            seq_ind = (seq_ind * CHANGE_KIND_N + change) % SEQUENCE_KIND_N;
            price = next_price;
            if n >= 3 && seen_by[seq_ind] != buyer_ind + 1 {
                seen_by[seq_ind] = buyer_ind + 1;
                totals[seq_ind] += price;
            }
        }
    }

    totals.into_iter().max().unwrap_or(0)
}

pub fn read_secrets<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let text = common::input::read_text(&path)?;
    common::input::parse_numbers(&text).with_context(|| {
        format!(
            "Failed to parse initial secret numbers in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(secret_sum(&read_secrets(path)?))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(most_bananas(&read_secrets(path)?))
}
