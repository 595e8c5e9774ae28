use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoColonInEquation(String),
    InvalidResultText(String),
    InvalidOperandText(String),
    NoOperands(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoColonInEquation(s) => write!(
                f,
                "Can't find separator(:) in equation text({}) between the result and operands.",
                s
            ),
            Error::InvalidResultText(s) => write!(f, "Invalid result text({}).", s),
            Error::InvalidOperandText(s) => write!(f, "Invalid operand text({}).", s),
            Error::NoOperands(s) => write!(f, "No operands in equation text({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Mul,
    Concat,
}

#[derive(Debug)]
pub struct Equation {
    result: u64,
    operands: Vec<u64>,
}

impl TryFrom<&str> for Equation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (result_text, operands_text) = value
            .split_once(':')
            .ok_or_else(|| Error::NoColonInEquation(value.to_string()))?;
        let result = result_text
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidResultText(result_text.to_string()))?;
        let operands = operands_text
            .split_ascii_whitespace()
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| Error::InvalidOperandText(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(Error::NoOperands(value.to_string()));
        }

        Ok(Self { result, operands })
    }
}

impl Equation {
    pub fn result(&self) -> u64 {
        self.result
    }

    pub fn can_be_true(&self, operators: &[Operator]) -> bool {
        Self::can_make(self.result, &self.operands, operators)
    }

    // Undo the last operator, operators evaluate left to right.
    fn can_make(target: u64, operands: &[u64], operators: &[Operator]) -> bool {
        let Some((last, rest)) = operands.split_last() else {
            return false;
        };
        if rest.is_empty() {
            return target == *last;
        }

        operators.iter().any(|op| match op {
            Operator::Add => target >= *last && Self::can_make(target - last, rest, operators),
            Operator::Mul => {
                *last != 0 && target % last == 0 && Self::can_make(target / last, rest, operators)
            }
            Operator::Concat => {
                let factor = 10u64.pow(digit_count(*last));
                target % factor == *last
                    && target >= factor
                    && Self::can_make(target / factor, rest, operators)
            }
        })
    }
}

fn digit_count(mut n: u64) -> u32 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }

    count
}

pub fn read_equations<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            Equation::try_from(l.as_str())
                .with_context(|| format!("Failed to parse equation from given text({}).", l))
        })
        .collect()
}

pub fn calibration_result(equations: &[Equation], operators: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|e| e.can_be_true(operators))
        .map(|e| e.result())
        .sum()
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<u64> {
    let equations = read_equations(path)?;
    Ok(calibration_result(
        &equations,
        &[Operator::Add, Operator::Mul],
    ))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<u64> {
    let equations = read_equations(path)?;
    Ok(calibration_result(
        &equations,
        &[Operator::Add, Operator::Mul, Operator::Concat],
    ))
}
