use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidHandText(String),
    InvalidCard(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHandText(s) => write!(f, "Invalid text({}) for hand and bid.", s),
            Error::InvalidCard(c) => write!(f, "Invalid card({}).", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

const CARD_ORDER: &str = "23456789TJQKA";
const JOKER_CARD_ORDER: &str = "J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [char; 5],
    bid: u64,
}

impl TryFrom<&str> for Hand {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (cards_text, bid_text) = value
            .trim()
            .split_once(' ')
            .ok_or_else(|| Error::InvalidHandText(value.to_string()))?;
        let cards: [char; 5] = cards_text
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| Error::InvalidHandText(value.to_string()))?;
        if let Some(c) = cards.iter().find(|c| !CARD_ORDER.contains(**c)) {
            return Err(Error::InvalidCard(*c));
        }
        let bid = bid_text
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidHandText(value.to_string()))?;

        Ok(Self { cards, bid })
    }
}

impl Hand {
    fn hand_type(&self, with_joker: bool) -> HandType {
        let mut counts = [0usize; 13];
        let mut joker_n = 0;
        for c in self.cards {
            if with_joker && c == 'J' {
                joker_n += 1;
            } else if let Some(ind) = CARD_ORDER.find(c) {
                counts[ind] += 1;
            }
        }

        counts.sort_unstable_by(|a, b| b.cmp(a));
        // Jokers always join the largest group.
        counts[0] += joker_n;
        match (counts[0], counts[1]) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn strength(&self, with_joker: bool) -> (HandType, [usize; 5]) {
        let order = if with_joker {
            JOKER_CARD_ORDER
        } else {
            CARD_ORDER
        };
        let card_strengths = self.cards.map(|c| order.find(c).unwrap_or(0));
        (self.hand_type(with_joker), card_strengths)
    }
}

pub fn total_winnings(hands: &[Hand], with_joker: bool) -> u64 {
    let mut ranked = hands
        .iter()
        .map(|h| (h.strength(with_joker), h.bid))
        .collect::<Vec<_>>();
    ranked.sort_unstable();
    ranked
        .iter()
        .enumerate()
        .map(|(ind, (_, bid))| (ind as u64 + 1) * bid)
        .sum()
}

pub fn read_hands<P: AsRef<Path>>(path: P) -> Result<Vec<Hand>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Hand::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse hands in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(total_winnings(&read_hands(path)?, false))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(total_winnings(&read_hands(path)?, true))
}
