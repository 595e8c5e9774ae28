use std::{
    collections::VecDeque,
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Grid, Position};

#[derive(Debug)]
pub enum Error {
    InvalidByteText(String),
    ByteOutOfMemory(Byte, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidByteText(s) => write!(f, "Invalid text({}) for falling byte.", s),
            Error::ByteOutOfMemory(b, size) => write!(
                f,
                "Byte at {} is out of memory space({} x {}).",
                b, size, size
            ),
        }
    }
}

impl error::Error for Error {}

pub const MEMORY_SIZE: usize = 71;
pub const FALLEN_BYTE_N: usize = 1024;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(long, default_value_t = MEMORY_SIZE)]
    pub size: usize,
    #[arg(long, default_value_t = FALLEN_BYTE_N)]
    pub bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte {
    pub x: usize,
    pub y: usize,
}

impl Display for Byte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TryFrom<&str> for Byte {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (x, y) = value
            .trim()
            .split_once(',')
            .ok_or_else(|| Error::InvalidByteText(value.to_string()))?;
        let parse = |s: &str| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidByteText(value.to_string()))
        };

        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

impl Byte {
    fn pos(&self) -> Position {
        Position::new(self.y, self.x)
    }
}

pub struct Memory {
    size: usize,
    bytes: Vec<Byte>,
}

impl Memory {
    pub fn new(size: usize, bytes: Vec<Byte>) -> Result<Self, Error> {
        if let Some(b) = bytes.iter().find(|b| b.x >= size || b.y >= size) {
            return Err(Error::ByteOutOfMemory(*b, size));
        }

        Ok(Self { size, bytes })
    }

    /// Steps from top left to bottom right after the first `fallen_n` bytes have fallen.
    pub fn min_steps(&self, fallen_n: usize) -> Option<usize> {
        if self.size == 0 {
            return None;
        }

        let mut corrupted = Grid::new(self.size, self.size, false);
        for b in self.bytes.iter().take(fallen_n) {
            corrupted[b.pos()] = true;
        }

        let start = Position::new(0, 0);
        let exit = Position::new(self.size - 1, self.size - 1);
        if corrupted[start] || corrupted[exit] {
            return None;
        }

        let mut steps = Grid::new(self.size, self.size, None);
        steps[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            let Some(cur_steps) = steps[pos] else {
                continue;
            };
            if pos == exit {
                return Some(cur_steps);
            }

            for next in corrupted.neighbors(&pos) {
                if !corrupted[next] && steps[next].is_none() {
                    steps[next] = Some(cur_steps + 1);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// First byte that makes the exit unreachable.
    pub fn first_blocking_byte(&self) -> Option<Byte> {
        if self.min_steps(self.bytes.len()).is_some() {
            return None;
        }

        // Exit is reachable after lo bytes, unreachable after hi bytes.
        let mut lo = 0;
        let mut hi = self.bytes.len();
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.min_steps(mid).is_some() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        self.bytes.get(hi - 1).copied()
    }
}

pub fn read_memory<P: AsRef<Path>>(path: P, size: usize) -> Result<Memory> {
    let bytes = common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Byte::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse falling bytes in given file({}).",
                path.as_ref().display()
            )
        })?;

    Ok(Memory::new(size, bytes)?)
}

pub fn part1<P: AsRef<Path>>(path: P, size: usize, fallen_n: usize) -> Result<Option<usize>> {
    Ok(read_memory(path, size)?.min_steps(fallen_n))
}

pub fn part2<P: AsRef<Path>>(path: P, size: usize) -> Result<Option<Byte>> {
    Ok(read_memory(path, size)?.first_blocking_byte())
}
