use std::{
    collections::HashMap,
    error,
    fmt::Display,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    NoParts,
    InvalidWorkflowText(String),
    InvalidRuleText(String),
    InvalidPartText(String),
    UnknownWorkflow(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoParts => write!(f, "Can't find part ratings after workflows."),
            Error::InvalidWorkflowText(s) => write!(f, "Invalid text({}) for workflow.", s),
            Error::InvalidRuleText(s) => write!(f, "Invalid text({}) for rule.", s),
            Error::InvalidPartText(s) => write!(f, "Invalid text({}) for part ratings.", s),
            Error::UnknownWorkflow(s) => write!(f, "Unknown workflow({}).", s),
        }
    }
}

impl error::Error for Error {}

pub const MIN_RATING: u64 = 1;
pub const MAX_RATING: u64 = 4000;
const START_WORKFLOW: &str = "in";

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Accept,
    Reject,
    Workflow(String),
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        match value {
            "A" => Target::Accept,
            "R" => Target::Reject,
            name => Target::Workflow(name.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
struct Condition {
    category: usize,
    less: bool,
    value: u64,
}

impl Condition {
    fn matches(&self, part: &Part) -> bool {
        let rating = part.ratings[self.category];
        if self.less {
            rating < self.value
        } else {
            rating > self.value
        }
    }

    /// Split a rating range into the parts matching and not matching this condition.
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        if self.less {
            let cut = self.value.clamp(range.start, range.end);
            (range.start..cut, cut..range.end)
        } else {
            let cut = (self.value + 1).clamp(range.start, range.end);
            (cut..range.end, range.start..cut)
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    condition: Option<Condition>,
    target: Target,
}

impl TryFrom<&str> for Rule {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static RULE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([xmas])([<>])(\d+):(\w+)$").unwrap());

        if !value.contains(':') {
            return Ok(Self {
                condition: None,
                target: Target::from(value),
            });
        }

        let caps = RULE_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidRuleText(value.to_string()))?;
        let category = "xmas"
            .find(&caps[1])
            .ok_or_else(|| Error::InvalidRuleText(value.to_string()))?;
        let threshold = caps[3]
            .parse::<u64>()
            .map_err(|_| Error::InvalidRuleText(value.to_string()))?;

        Ok(Self {
            condition: Some(Condition {
                category,
                less: &caps[2] == "<",
                value: threshold,
            }),
            target: Target::from(&caps[4]),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Part {
    ratings: [u64; 4],
}

impl TryFrom<&str> for Part {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PART_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\{x=(\d+),m=(\d+),a=(\d+),s=(\d+)\}$").unwrap());

        let caps = PART_PATTERN
            .captures(value.trim())
            .ok_or_else(|| Error::InvalidPartText(value.to_string()))?;
        let mut ratings = [0; 4];
        for (ind, rating) in ratings.iter_mut().enumerate() {
            *rating = caps[ind + 1]
                .parse()
                .map_err(|_| Error::InvalidPartText(value.to_string()))?;
        }

        Ok(Self { ratings })
    }
}

impl Part {
    pub fn rating_sum(&self) -> u64 {
        self.ratings.iter().sum()
    }
}

pub struct System {
    workflows: HashMap<String, Vec<Rule>>,
    parts: Vec<Part>,
}

impl TryFrom<&str> for System {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static WORKFLOW_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\w+)\{(.*)\}$").unwrap());

        let blocks = common::input::split_blocks(value);
        let [workflow_block, part_block] = &blocks[..] else {
            return Err(Error::NoParts);
        };

        let mut workflows = HashMap::new();
        for line in workflow_block.lines() {
            let caps = WORKFLOW_PATTERN
                .captures(line.trim())
                .ok_or_else(|| Error::InvalidWorkflowText(line.to_string()))?;
            let rules = caps[2]
                .split(',')
                .map(Rule::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            workflows.insert(caps[1].to_string(), rules);
        }

        let parts = part_block
            .lines()
            .map(Part::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { workflows, parts })
    }
}

impl System {
    fn rules(&self, name: &str) -> Result<&[Rule], Error> {
        self.workflows
            .get(name)
            .map(|r| r.as_slice())
            .ok_or_else(|| Error::UnknownWorkflow(name.to_string()))
    }

    pub fn is_accepted(&self, part: &Part) -> Result<bool, Error> {
        let mut name = START_WORKFLOW.to_string();
        // Each workflow is visited at most once unless workflows loop.
        for _ in 0..=self.workflows.len() {
            let rules = self.rules(&name)?;
            let target = rules
                .iter()
                .find(|r| r.condition.as_ref().map_or(true, |c| c.matches(part)))
                .map(|r| &r.target)
                .unwrap_or(&Target::Reject);
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => name = next.clone(),
            }
        }

        Ok(false)
    }

    pub fn accepted_rating_sum(&self) -> Result<u64, Error> {
        let mut sum = 0;
        for part in &self.parts {
            if self.is_accepted(part)? {
                sum += part.rating_sum();
            }
        }

        Ok(sum)
    }

    pub fn accepted_combination_count(&self) -> Result<u64, Error> {
        let full = MIN_RATING..(MAX_RATING + 1);
        let ranges = [full.clone(), full.clone(), full.clone(), full];
        self.count_accepted(START_WORKFLOW, ranges, 0)
    }

    fn count_accepted(
        &self,
        name: &str,
        mut ranges: [Range<u64>; 4],
        depth: usize,
    ) -> Result<u64, Error> {
        if depth > self.workflows.len() {
            return Ok(0);
        }

        let mut count = 0;
        for rule in self.rules(name)? {
            if ranges.iter().any(|r| r.is_empty()) {
                break;
            }

            let matched = match &rule.condition {
                Some(condition) => {
                    let (yes, no) = condition.split(&ranges[condition.category]);
                    let mut matched = ranges.clone();
                    matched[condition.category] = yes;
                    ranges[condition.category] = no;
                    matched
                }
                None => {
                    let matched = ranges.clone();
                    ranges[0] = 0..0;
                    matched
                }
            };

            count += match &rule.target {
                Target::Accept => matched.iter().map(|r| r.end - r.start).product(),
                Target::Reject => 0,
                Target::Workflow(next) => self.count_accepted(next, matched, depth + 1)?,
            };
        }

        Ok(count)
    }
}

pub fn read_system<P: AsRef<Path>>(path: P) -> Result<System> {
    let text = common::input::read_text(&path)?;
    System::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse workflows and parts in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(read_system(path)?.accepted_rating_sum()?)
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(read_system(path)?.accepted_combination_count()?)
}
