use std::{
    error,
    fmt::Display,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NoSeeds,
    InvalidSeedsText(String),
    InvalidMapText(String),
    OddSeedRanges(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoSeeds => write!(f, "Can't find seeds in almanac."),
            Error::InvalidSeedsText(s) => write!(f, "Invalid text({}) for seeds.", s),
            Error::InvalidMapText(s) => write!(f, "Invalid text({}) for map.", s),
            Error::OddSeedRanges(n) => write!(
                f,
                "Seed ranges need an even count of numbers, given {}.",
                n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
struct MapRange {
    src: Range<u64>,
    dst_start: u64,
}

impl MapRange {
    fn convert(&self, n: u64) -> u64 {
        n - self.src.start + self.dst_start
    }
}

#[derive(Debug, Clone)]
struct Map {
    // Sorted by source start, no overlapping.
    ranges: Vec<MapRange>,
}

impl TryFrom<&str> for Map {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut ranges = Vec::new();
        for line in value.lines().skip(1) {
            let ns = common::input::parse_numbers::<u64>(line)
                .map_err(|_| Error::InvalidMapText(line.to_string()))?;
            let [dst_start, src_start, len] = ns[..] else {
                return Err(Error::InvalidMapText(line.to_string()));
            };
            ranges.push(MapRange {
                src: src_start..(src_start + len),
                dst_start,
            });
        }
        ranges.sort_by_key(|r| r.src.start);

        Ok(Self { ranges })
    }
}

impl Map {
    fn convert(&self, n: u64) -> u64 {
        self.ranges
            .iter()
            .find(|r| r.src.contains(&n))
            .map_or(n, |r| r.convert(n))
    }

    fn convert_range(&self, range: Range<u64>) -> Vec<Range<u64>> {
        let mut converted = Vec::new();
        let mut cur = range.start;
        for r in &self.ranges {
            if cur >= range.end {
                break;
            }
            if r.src.end <= cur {
                continue;
            }

            // Gap before this map range keeps numbers unchanged.
            if r.src.start > cur {
                let gap_end = r.src.start.min(range.end);
                converted.push(cur..gap_end);
                cur = gap_end;
            }

            let overlap_end = r.src.end.min(range.end);
            if cur < overlap_end {
                converted.push(r.convert(cur)..r.convert(overlap_end - 1) + 1);
                cur = overlap_end;
            }
        }

        if cur < range.end {
            converted.push(cur..range.end);
        }

        converted
    }
}

pub struct Almanac {
    seeds: Vec<u64>,
    maps: Vec<Map>,
}

impl TryFrom<&str> for Almanac {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let blocks = common::input::split_blocks(value);
        let (seeds_block, map_blocks) = blocks.split_first().ok_or(Error::NoSeeds)?;
        let seeds_text = seeds_block
            .strip_prefix("seeds:")
            .ok_or_else(|| Error::InvalidSeedsText(seeds_block.to_string()))?;
        let seeds = common::input::parse_numbers(seeds_text)
            .map_err(|_| Error::InvalidSeedsText(seeds_block.to_string()))?;
        let maps = map_blocks
            .iter()
            .map(|b| Map::try_from(b.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { seeds, maps })
    }
}

impl Almanac {
    pub fn location(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |n, m| m.convert(n))
    }

    pub fn min_seed_location(&self) -> Option<u64> {
        self.seeds.iter().map(|s| self.location(*s)).min()
    }

    pub fn min_seed_range_location(&self) -> Result<Option<u64>, Error> {
        if self.seeds.len() % 2 != 0 {
            return Err(Error::OddSeedRanges(self.seeds.len()));
        }

        let mut ranges = self
            .seeds
            .chunks(2)
            .map(|pair| pair[0]..(pair[0] + pair[1]))
            .filter(|r| !r.is_empty())
            .collect::<Vec<_>>();
        for map in &self.maps {
            ranges = ranges
                .into_iter()
                .flat_map(|r| map.convert_range(r))
                .collect();
        }

        Ok(ranges.iter().map(|r| r.start).min())
    }
}

pub fn read_almanac<P: AsRef<Path>>(path: P) -> Result<Almanac> {
    let text = common::input::read_text(&path)?;
    Almanac::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse almanac in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
    Ok(read_almanac(path)?.min_seed_location())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
    Ok(read_almanac(path)?.min_seed_range_location()?)
}
