use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(usize, usize),
    Do,
    Dont,
}

pub struct Memory {
    insts: Vec<Instruction>,
}

impl From<&str> for Memory {
    fn from(value: &str) -> Self {
        static INST_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap()
        });

        let insts = INST_PATTERN
            .captures_iter(value)
            .filter_map(|caps| match &caps[0] {
                "do()" => Some(Instruction::Do),
                "don't()" => Some(Instruction::Dont),
                _ => {
                    let l_factor = caps[1].parse::<usize>().ok()?;
                    let r_factor = caps[2].parse::<usize>().ok()?;
                    Some(Instruction::Mul(l_factor, r_factor))
                }
            })
            .collect();

        Self { insts }
    }
}

impl Memory {
    pub fn mul_sum(&self) -> usize {
        self.insts
            .iter()
            .map(|inst| match inst {
                Instruction::Mul(l, r) => l * r,
                _ => 0,
            })
            .sum()
    }

    pub fn enabled_mul_sum(&self) -> usize {
        let mut sum = 0;
        let mut do_mul = true;
        for inst in &self.insts {
            match inst {
                Instruction::Mul(l, r) if do_mul => sum += l * r,
                Instruction::Mul(_, _) => (),
                Instruction::Do => do_mul = true,
                Instruction::Dont => do_mul = false,
            }
        }

        sum
    }
}

pub fn read_memory<P: AsRef<Path>>(path: P) -> Result<Memory> {
    let text = common::input::read_text(path)?;
    Ok(Memory::from(text.as_str()))
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_memory(path)?.mul_sum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_memory(path)?.enabled_mul_sum())
}
