use std::{
    collections::HashSet,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidCardText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCardText(s) => write!(f, "Invalid text({}) for scratchcard.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Card {
    match_n: usize,
}

impl TryFrom<&str> for Card {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let invalid = || Error::InvalidCardText(value.to_string());
        let (_, numbers) = value.split_once(':').ok_or_else(invalid)?;
        let (winning, have) = numbers.split_once('|').ok_or_else(invalid)?;
        let winning = common::input::parse_numbers::<u32>(winning)
            .map_err(|_| invalid())?
            .into_iter()
            .collect::<HashSet<_>>();
        let match_n = common::input::parse_numbers::<u32>(have)
            .map_err(|_| invalid())?
            .iter()
            .filter(|n| winning.contains(*n))
            .count();

        Ok(Self { match_n })
    }
}

impl Card {
    pub fn points(&self) -> u32 {
        if self.match_n == 0 {
            0
        } else {
            1 << (self.match_n - 1)
        }
    }
}

pub fn total_card_count(cards: &[Card]) -> usize {
    let mut copies = vec![1usize; cards.len()];
    for (ind, card) in cards.iter().enumerate() {
        let end = (ind + 1 + card.match_n).min(cards.len());
        for won_ind in (ind + 1)..end {
            copies[won_ind] += copies[ind];
        }
    }

    copies.iter().sum()
}

pub fn read_cards<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Card::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse scratchcards in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u32> {
    Ok(read_cards(path)?.iter().map(|c| c.points()).sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(total_card_count(&read_cards(path)?))
}
