use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::xyz::Vec3;
use once_cell::sync::Lazy;
use regex::Regex;

pub const AREA_MIN: i64 = 200_000_000_000_000;
pub const AREA_MAX: i64 = 400_000_000_000_000;

#[derive(Debug)]
pub enum Error {
    InvalidHailstoneText(String),
    TooFewHailstones(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidHailstoneText(s) => write!(f, "Invalid text({}) for hailstone.", s),
            Error::TooFewHailstones(n) => write!(
                f,
                "Need at least 4 hailstones to find the rock's throw, given {}.",
                n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Lower bound of x and y in the test area
    #[arg(long, default_value_t = AREA_MIN, allow_negative_numbers = true)]
    pub min: i64,
    /// Upper bound of x and y in the test area
    #[arg(long, default_value_t = AREA_MAX, allow_negative_numbers = true)]
    pub max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    pos: Vec3,
    vel: Vec3,
}

impl TryFrom<&str> for Hailstone {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());

        let invalid = || Error::InvalidHailstoneText(value.to_string());
        if !value.contains('@') {
            return Err(invalid());
        }

        let numbers = NUMBER_PATTERN
            .find_iter(value)
            .map(|m| m.as_str().parse::<i128>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        let [px, py, pz, vx, vy, vz] = numbers[..] else {
            return Err(invalid());
        };

        Ok(Self {
            pos: Vec3::new(px, py, pz),
            vel: Vec3::new(vx, vy, vz),
        })
    }
}

impl Hailstone {
    pub fn new(pos: Vec3, vel: Vec3) -> Self {
        Self { pos, vel }
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Where paths of two hailstones cross in x and y, if both reach it in the future.
    pub fn future_crossing_xy(&self, other: &Self) -> Option<(f64, f64)> {
        let denom = self.vel.x * other.vel.y - self.vel.y * other.vel.x;
        if denom == 0 {
            return None;
        }

        let dx = other.pos.x - self.pos.x;
        let dy = other.pos.y - self.pos.y;
        let t_num = dx * other.vel.y - dy * other.vel.x;
        let s_num = dx * self.vel.y - dy * self.vel.x;
        // Times are t_num / denom and s_num / denom, both must not be negative.
        if t_num.signum() * denom.signum() < 0 || s_num.signum() * denom.signum() < 0 {
            return None;
        }

        let t = t_num as f64 / denom as f64;
        Some((
            self.pos.x as f64 + self.vel.x as f64 * t,
            self.pos.y as f64 + self.vel.y as f64 * t,
        ))
    }

    /// Time when this hailstone passes through plane with given normal and through origin.
    fn plane_crossing_time(&self, normal: &Vec3) -> Option<i128> {
        let speed = self.vel.dot(normal);
        if speed == 0 {
            return None;
        }

        let dist = -self.pos.dot(normal);
        (dist % speed == 0).then_some(dist / speed)
    }
}

pub fn crossing_count_in_area(hailstones: &[Hailstone], min: i64, max: i64) -> usize {
    let (min, max) = (min as f64, max as f64);
    let in_area = |v: f64| (min..=max).contains(&v);
    hailstones
        .iter()
        .enumerate()
        .flat_map(|(ind, a)| hailstones[(ind + 1)..].iter().map(move |b| (a, b)))
        .filter_map(|(a, b)| a.future_crossing_xy(b))
        .filter(|(x, y)| in_area(*x) && in_area(*y))
        .count()
}

/// Starting position and velocity of a rock thrown to hit every hailstone.
pub fn perfect_throw(hailstones: &[Hailstone]) -> Result<Option<Hailstone>, Error> {
    if hailstones.len() < 4 {
        return Err(Error::TooFewHailstones(hailstones.len()));
    }

    // In the frame of the first hailstone, the rock passes the origin.
    let base = hailstones[0];
    let relative = hailstones[1..]
        .iter()
        .map(|h| Hailstone::new(h.pos - base.pos, h.vel - base.vel))
        .collect::<Vec<_>>();
    for (ind, plane_stone) in relative.iter().enumerate() {
        let normal = plane_stone.pos.cross(&plane_stone.vel);
        if normal == Vec3::default() {
            continue;
        }

        let hits = relative
            .iter()
            .enumerate()
            .filter(|(other_ind, _)| *other_ind != ind)
            .filter_map(|(_, h)| {
                h.plane_crossing_time(&normal)
                    .map(|t| (t, h.pos + h.vel * t))
            })
            .take(2)
            .collect::<Vec<_>>();
        let [(t1, hit1), (t2, hit2)] = hits[..] else {
            continue;
        };
        if t1 == t2 {
            continue;
        }

        let Some(vel) = (hit1 - hit2).div_exact(t1 - t2) else {
            continue;
        };
        let pos = hit1 - vel * t1;
        return Ok(Some(Hailstone::new(pos + base.pos, vel + base.vel)));
    }

    Ok(None)
}

pub fn read_hailstones<P: AsRef<Path>>(path: P) -> Result<Vec<Hailstone>> {
    common::input::read_lines(&path)?
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| Hailstone::try_from(l.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| {
            format!(
                "Failed to parse hailstones in given file({}).",
                path.as_ref().display()
            )
        })
}

pub fn part1<P: AsRef<Path>>(path: P, min: i64, max: i64) -> Result<usize> {
    Ok(crossing_count_in_area(&read_hailstones(path)?, min, max))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<i128>> {
    Ok(perfect_throw(&read_hailstones(path)?)?.map(|rock| rock.pos().sum()))
}
