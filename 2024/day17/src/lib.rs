use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidRegisterText(String),
    InvalidProgramText(String),
    InvalidComboOperand(u8),
    InvalidOpcode(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRegisterText(s) => write!(f, "Invalid text({}) for registers.", s),
            Error::InvalidProgramText(s) => write!(f, "Invalid text({}) for program.", s),
            Error::InvalidComboOperand(n) => write!(f, "Invalid combo operand({}).", n),
            Error::InvalidOpcode(n) => write!(f, "Invalid opcode({}).", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

#[derive(Debug, Clone)]
pub struct Computer {
    regs: Registers,
    program: Vec<u8>,
}

impl TryFrom<&str> for Computer {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static REGISTER_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"Register ([ABC]):\s*(\d+)").unwrap());
        static PROGRAM_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"Program:\s*([0-7](?:\s*,\s*[0-7])*)").unwrap());

        let mut regs = Registers::default();
        for caps in REGISTER_PATTERN.captures_iter(value) {
            let n = caps[2]
                .parse::<u64>()
                .map_err(|_| Error::InvalidRegisterText(caps[0].to_string()))?;
            match &caps[1] {
                "A" => regs.a = n,
                "B" => regs.b = n,
                _ => regs.c = n,
            }
        }

        let program_caps = PROGRAM_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidProgramText(value.to_string()))?;
        let program = program_caps[1]
            .split(',')
            .map(|s| {
                s.trim()
                    .parse::<u8>()
                    .map_err(|_| Error::InvalidProgramText(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { regs, program })
    }
}

impl Computer {
    pub fn new(regs: Registers, program: Vec<u8>) -> Self {
        Self { regs, program }
    }

    pub fn registers(&self) -> Registers {
        self.regs
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    pub fn run(&mut self) -> Result<Vec<u8>, Error> {
        let mut output = Vec::new();
        let mut ip = 0;
        while ip + 1 < self.program.len() {
            let opcode = self.program[ip];
            let operand = self.program[ip + 1];
            ip += 2;
            match opcode {
                0 => self.regs.a >>= self.combo(operand)?,
                1 => self.regs.b ^= operand as u64,
                2 => self.regs.b = self.combo(operand)? & 0b111,
                3 => {
                    if self.regs.a != 0 {
                        ip = operand as usize;
                    }
                }
                4 => self.regs.b ^= self.regs.c,
                5 => output.push((self.combo(operand)? & 0b111) as u8),
                6 => self.regs.b = self.regs.a >> self.combo(operand)?,
                7 => self.regs.c = self.regs.a >> self.combo(operand)?,
                other => return Err(Error::InvalidOpcode(other)),
            }
        }

        Ok(output)
    }

    pub fn run_with_a(&self, a: u64) -> Result<Vec<u8>, Error> {
        let mut computer = self.clone();
        computer.regs.a = a;
        computer.run()
    }

    /// Smallest value of register A that makes the program output a copy of itself.
    ///
    /// Each loop of the program outputs one value then shifts A by 3 bits, so A can be
    /// built 3 bits at a time, starting from the last output.
    pub fn quine_a(&self) -> Result<Option<u64>, Error> {
        let mut candidates = vec![0u64];
        for start_ind in (0..self.program.len()).rev() {
            let expect = &self.program[start_ind..];
            let mut next_candidates = Vec::new();
            for a in &candidates {
                for bits in 0..8 {
                    let next_a = (a << 3) | bits;
                    if self.run_with_a(next_a)? == expect {
                        next_candidates.push(next_a);
                    }
                }
            }

            if next_candidates.is_empty() {
                return Ok(None);
            }
            candidates = next_candidates;
        }

        Ok(candidates.into_iter().filter(|a| *a > 0).min())
    }

    fn combo(&self, operand: u8) -> Result<u64, Error> {
        match operand {
            0..=3 => Ok(operand as u64),
            4 => Ok(self.regs.a),
            5 => Ok(self.regs.b),
            6 => Ok(self.regs.c),
            other => Err(Error::InvalidComboOperand(other)),
        }
    }
}

pub fn join_output(output: &[u8]) -> String {
    output
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn read_computer<P: AsRef<Path>>(path: P) -> Result<Computer> {
    let text = common::input::read_text(&path)?;
    Computer::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse computer in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut computer = read_computer(path)?;
    Ok(join_output(&computer.run()?))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
    Ok(read_computer(path)?.quine_a()?)
}
