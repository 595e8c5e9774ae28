use std::{
    cmp::Ordering,
    collections::HashSet,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidRuleText(String),
    InvalidUpdateText(String),
    MissingSection,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRuleText(s) => write!(f, "Invalid text({}) for ordering rule.", s),
            Error::InvalidUpdateText(s) => write!(f, "Invalid text({}) for update.", s),
            Error::MissingSection => write!(
                f,
                "Expect ordering rules and updates separated by an empty line."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct OrderRules {
    before_pairs: HashSet<(usize, usize)>,
}

impl OrderRules {
    pub fn add(&mut self, text: &str) -> Result<(), Error> {
        let (before, after) = text
            .split_once('|')
            .ok_or_else(|| Error::InvalidRuleText(text.to_string()))?;
        let before = before
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(text.to_string()))?;
        let after = after
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(text.to_string()))?;
        self.before_pairs.insert((before, after));
        Ok(())
    }

    pub fn compare(&self, l: usize, r: usize) -> Ordering {
        if self.before_pairs.contains(&(l, r)) {
            Ordering::Less
        } else if self.before_pairs.contains(&(r, l)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub fn is_ordered(&self, update: &[usize]) -> bool {
        update
            .windows(2)
            .all(|pair| self.compare(pair[0], pair[1]) != Ordering::Greater)
    }

    pub fn sorted(&self, update: &[usize]) -> Vec<usize> {
        let mut pages = update.to_vec();
        pages.sort_by(|l, r| self.compare(*l, *r));
        pages
    }
}

#[derive(Debug)]
pub struct PrintQueue {
    rules: OrderRules,
    updates: Vec<Vec<usize>>,
}

impl PrintQueue {
    pub fn ordered_middle_sum(&self) -> usize {
        self.updates
            .iter()
            .filter(|u| self.rules.is_ordered(u))
            .map(|u| middle(u))
            .sum()
    }

    pub fn reordered_middle_sum(&self) -> usize {
        self.updates
            .iter()
            .filter(|u| !self.rules.is_ordered(u))
            .map(|u| middle(&self.rules.sorted(u)))
            .sum()
    }
}

fn middle(pages: &[usize]) -> usize {
    pages.get(pages.len() / 2).copied().unwrap_or(0)
}

fn parse_update(text: &str) -> Result<Vec<usize>, Error> {
    text.split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidUpdateText(text.to_string()))
        })
        .collect()
}

pub fn read_print_queue<P: AsRef<Path>>(path: P) -> Result<PrintQueue> {
    let text = common::input::read_text(&path)?;
    let blocks = common::input::split_blocks(&text);
    let [rule_block, update_block] = blocks.as_slice() else {
        return Err(Error::MissingSection.into());
    };

    let mut rules = OrderRules::default();
    for line in rule_block.lines() {
        rules
            .add(line)
            .with_context(|| format!("Failed to add ordering rule({}).", line))?;
    }
    let updates = update_block
        .lines()
        .map(parse_update)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PrintQueue { rules, updates })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_print_queue(path)?.ordered_middle_sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_print_queue(path)?.reordered_middle_sum())
}
