use std::{
    collections::HashSet,
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
    InvalidRobotText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRobotText(s) => write!(f, "Invalid text({}) for robot.", s),
        }
    }
}

impl error::Error for Error {}

pub const ROOM_WIDTH: i64 = 101;
pub const ROOM_HEIGHT: i64 = 103;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(long, default_value_t = ROOM_WIDTH)]
    pub width: i64,
    #[arg(long, default_value_t = ROOM_HEIGHT)]
    pub height: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct Room {
    width: i64,
    height: i64,
}

impl Room {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn quad_ind(&self, (x, y): (i64, i64)) -> Option<usize> {
        let mid_x = self.width / 2;
        let mid_y = self.height / 2;
        if x == mid_x || y == mid_y {
            return None;
        }

        Some(usize::from(x > mid_x) + 2 * usize::from(y > mid_y))
    }
}

#[derive(Debug, Clone)]
pub struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

impl TryFrom<&str> for Robot {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static ROBOT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"p=(-?\d+),(-?\d+)\s+v=(-?\d+),(-?\d+)").unwrap());

        let caps = ROBOT_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidRobotText(value.to_string()))?;
        let n = |ind: usize| {
            caps[ind]
                .parse::<i64>()
                .map_err(|_| Error::InvalidRobotText(value.to_string()))
        };

        Ok(Self {
            pos: (n(1)?, n(2)?),
            vel: (n(3)?, n(4)?),
        })
    }
}

impl Robot {
    pub fn pos_after(&self, seconds: i64, room: &Room) -> (i64, i64) {
        (
            (self.pos.0 + self.vel.0 * seconds).rem_euclid(room.width),
            (self.pos.1 + self.vel.1 * seconds).rem_euclid(room.height),
        )
    }
}

pub fn safety_factor(robots: &[Robot], room: &Room, seconds: i64) -> usize {
    let mut counts_in_quads = [0usize; 4];
    for r in robots {
        if let Some(quad_ind) = room.quad_ind(r.pos_after(seconds, room)) {
            counts_in_quads[quad_ind] += 1;
        }
    }

    counts_in_quads.iter().product()
}

/// The first second robots don't overlap each other, that's when they draw the tree.
pub fn first_distinct_second(robots: &[Robot], room: &Room) -> Option<i64> {
    (0..(room.width * room.height)).find(|seconds| {
        let mut seen = HashSet::with_capacity(robots.len());
        robots
            .iter()
            .all(|r| seen.insert(r.pos_after(*seconds, room)))
    })
}

pub fn read_robots<P: AsRef<Path>>(path: P) -> Result<Vec<Robot>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            Robot::try_from(l.as_str())
                .with_context(|| format!("Failed to parse robot from given text({}).", l))
        })
        .collect()
}

pub fn part1<P: AsRef<Path>>(path: P, room: &Room) -> Result<usize> {
    Ok(safety_factor(&read_robots(path)?, room, 100))
}

pub fn part2<P: AsRef<Path>>(path: P, room: &Room) -> Result<Option<i64>> {
    Ok(first_distinct_second(&read_robots(path)?, room))
}
