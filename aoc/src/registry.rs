use std::{error, fmt::Display, path::Path};

use anyhow::Result;
use aoc2023_day11::{OLD_EXPANSION, YOUNG_EXPANSION};
use aoc2023_day21::{LONG_STEP_N, SHORT_STEP_N};
use aoc2023_day24::{AREA_MAX, AREA_MIN};
use aoc2023_day25::CUT_WIRE_N;
use aoc2024_day14::{Room, ROOM_HEIGHT, ROOM_WIDTH};
use aoc2024_day18::{FALLEN_BYTE_N, MEMORY_SIZE};
use aoc2024_day20::SAVE_THRESHOLD;
use aoc2024_day24::SWAP_PAIR_N;

use crate::puzzle::Part;

#[derive(Debug)]
pub enum Error {
    Unsolved(i32, u32),
    NoPartTwo(i32),
    NoAnswer(i32, u32, Part),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unsolved(year, day) => {
                write!(f, "There is no solver for {} day {} yet.", year, day)
            }
            Error::NoPartTwo(year) => write!(
                f,
                "Day 25 of {} has no second part, it's given once every other star is collected.",
                year
            ),
            Error::NoAnswer(year, day, part) => write!(
                f,
                "The solver of {} day {} part {} found no answer for given input.",
                year, day, part
            ),
        }
    }
}

impl error::Error for Error {}

/// Run solver of given puzzle part on input file, with the default parameters of real inputs.
pub fn solve(year: i32, day: u32, part: Part, path: &Path) -> Result<String> {
    match year {
        2023 => solve_2023(day, part, path),
        2024 => solve_2024(day, part, path),
        other => Err(Error::Unsolved(other, day).into()),
    }
}

fn solve_2023(day: u32, part: Part, path: &Path) -> Result<String> {
    let no_answer = || Error::NoAnswer(2023, day, part);
    let answer = match (day, part) {
        (1, Part::One) => aoc2023_day1::part1(path)?.to_string(),
        (1, Part::Two) => aoc2023_day1::part2(path)?.to_string(),
        (2, Part::One) => aoc2023_day2::part1(path)?.to_string(),
        (2, Part::Two) => aoc2023_day2::part2(path)?.to_string(),
        (3, Part::One) => aoc2023_day3::part1(path)?.to_string(),
        (3, Part::Two) => aoc2023_day3::part2(path)?.to_string(),
        (4, Part::One) => aoc2023_day4::part1(path)?.to_string(),
        (4, Part::Two) => aoc2023_day4::part2(path)?.to_string(),
        (5, Part::One) => aoc2023_day5::part1(path)?.ok_or_else(no_answer)?.to_string(),
        (5, Part::Two) => aoc2023_day5::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (6, Part::One) => aoc2023_day6::part1(path)?.to_string(),
        (6, Part::Two) => aoc2023_day6::part2(path)?.to_string(),
        (7, Part::One) => aoc2023_day7::part1(path)?.to_string(),
        (7, Part::Two) => aoc2023_day7::part2(path)?.to_string(),
        (8, Part::One) => aoc2023_day8::part1(path)?.ok_or_else(no_answer)?.to_string(),
        (8, Part::Two) => aoc2023_day8::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (9, Part::One) => aoc2023_day9::part1(path)?.to_string(),
        (9, Part::Two) => aoc2023_day9::part2(path)?.to_string(),
        (10, Part::One) => aoc2023_day10::part1(path)?.to_string(),
        (10, Part::Two) => aoc2023_day10::part2(path)?.to_string(),
        (11, Part::One) => aoc2023_day11::part1(path, YOUNG_EXPANSION)?.to_string(),
        (11, Part::Two) => aoc2023_day11::part2(path, OLD_EXPANSION)?.to_string(),
        (12, Part::One) => aoc2023_day12::part1(path)?.to_string(),
        (12, Part::Two) => aoc2023_day12::part2(path)?.to_string(),
        (13, Part::One) => aoc2023_day13::part1(path)?.to_string(),
        (13, Part::Two) => aoc2023_day13::part2(path)?.to_string(),
        (14, Part::One) => aoc2023_day14::part1(path)?.to_string(),
        (14, Part::Two) => aoc2023_day14::part2(path)?.to_string(),
        (15, Part::One) => aoc2023_day15::part1(path)?.to_string(),
        (15, Part::Two) => aoc2023_day15::part2(path)?.to_string(),
        (16, Part::One) => aoc2023_day16::part1(path)?.to_string(),
        (16, Part::Two) => aoc2023_day16::part2(path)?.to_string(),
        (17, Part::One) => aoc2023_day17::part1(path)?.ok_or_else(no_answer)?.to_string(),
        (17, Part::Two) => aoc2023_day17::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (18, Part::One) => aoc2023_day18::part1(path)?.to_string(),
        (18, Part::Two) => aoc2023_day18::part2(path)?.to_string(),
        (19, Part::One) => aoc2023_day19::part1(path)?.to_string(),
        (19, Part::Two) => aoc2023_day19::part2(path)?.to_string(),
        (20, Part::One) => aoc2023_day20::part1(path)?.to_string(),
        (20, Part::Two) => aoc2023_day20::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (21, Part::One) => aoc2023_day21::part1(path, SHORT_STEP_N)?.to_string(),
        (21, Part::Two) => aoc2023_day21::part2(path, LONG_STEP_N)?.to_string(),
        (22, Part::One) => aoc2023_day22::part1(path)?.to_string(),
        (22, Part::Two) => aoc2023_day22::part2(path)?.to_string(),
        (23, Part::One) => aoc2023_day23::part1(path)?.ok_or_else(no_answer)?.to_string(),
        (23, Part::Two) => aoc2023_day23::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (24, Part::One) => aoc2023_day24::part1(path, AREA_MIN, AREA_MAX)?.to_string(),
        (24, Part::Two) => aoc2023_day24::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (25, Part::One) => aoc2023_day25::part1(path, CUT_WIRE_N)?
            .ok_or_else(no_answer)?
            .to_string(),
        (25, Part::Two) => return Err(Error::NoPartTwo(2023).into()),
        _ => return Err(Error::Unsolved(2023, day).into()),
    };

    Ok(answer)
}

fn solve_2024(day: u32, part: Part, path: &Path) -> Result<String> {
    let no_answer = || Error::NoAnswer(2024, day, part);
    let answer = match (day, part) {
        (1, Part::One) => aoc2024_day1::part1(path)?.to_string(),
        (1, Part::Two) => aoc2024_day1::part2(path)?.to_string(),
        (2, Part::One) => aoc2024_day2::part1(path)?.to_string(),
        (2, Part::Two) => aoc2024_day2::part2(path)?.to_string(),
        (3, Part::One) => aoc2024_day3::part1(path)?.to_string(),
        (3, Part::Two) => aoc2024_day3::part2(path)?.to_string(),
        (4, Part::One) => aoc2024_day4::part1(path)?.to_string(),
        (4, Part::Two) => aoc2024_day4::part2(path)?.to_string(),
        (5, Part::One) => aoc2024_day5::part1(path)?.to_string(),
        (5, Part::Two) => aoc2024_day5::part2(path)?.to_string(),
        (6, Part::One) => aoc2024_day6::part1(path)?.to_string(),
        (6, Part::Two) => aoc2024_day6::part2(path)?.to_string(),
        (7, Part::One) => aoc2024_day7::part1(path)?.to_string(),
        (7, Part::Two) => aoc2024_day7::part2(path)?.to_string(),
        (8, Part::One) => aoc2024_day8::part1(path)?.to_string(),
        (8, Part::Two) => aoc2024_day8::part2(path)?.to_string(),
        (9, Part::One) => aoc2024_day9::part1(path)?.to_string(),
        (9, Part::Two) => aoc2024_day9::part2(path)?.to_string(),
        (10, Part::One) => aoc2024_day10::part1(path)?.to_string(),
        (10, Part::Two) => aoc2024_day10::part2(path)?.to_string(),
        (11, Part::One) => aoc2024_day11::part1(path)?.to_string(),
        (11, Part::Two) => aoc2024_day11::part2(path)?.to_string(),
        (12, Part::One) => aoc2024_day12::part1(path)?.to_string(),
        (12, Part::Two) => aoc2024_day12::part2(path)?.to_string(),
        (13, Part::One) => aoc2024_day13::part1(path)?.to_string(),
        (13, Part::Two) => aoc2024_day13::part2(path)?.to_string(),
        (14, Part::One) => aoc2024_day14::part1(path, &Room::new(ROOM_WIDTH, ROOM_HEIGHT))?
            .to_string(),
        (14, Part::Two) => aoc2024_day14::part2(path, &Room::new(ROOM_WIDTH, ROOM_HEIGHT))?
            .ok_or_else(no_answer)?
            .to_string(),
        (15, Part::One) => aoc2024_day15::part1(path)?.to_string(),
        (15, Part::Two) => aoc2024_day15::part2(path)?.to_string(),
        (16, Part::One) => aoc2024_day16::part1(path)?.ok_or_else(no_answer)?.to_string(),
        (16, Part::Two) => aoc2024_day16::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (17, Part::One) => aoc2024_day17::part1(path)?,
        (17, Part::Two) => aoc2024_day17::part2(path)?.ok_or_else(no_answer)?.to_string(),
        (18, Part::One) => aoc2024_day18::part1(path, MEMORY_SIZE, FALLEN_BYTE_N)?
            .ok_or_else(no_answer)?
            .to_string(),
        (18, Part::Two) => aoc2024_day18::part2(path, MEMORY_SIZE)?
            .ok_or_else(no_answer)?
            .to_string(),
        (19, Part::One) => aoc2024_day19::part1(path)?.to_string(),
        (19, Part::Two) => aoc2024_day19::part2(path)?.to_string(),
        (20, Part::One) => aoc2024_day20::part1(path, SAVE_THRESHOLD)?.to_string(),
        (20, Part::Two) => aoc2024_day20::part2(path, SAVE_THRESHOLD)?.to_string(),
        (21, Part::One) => aoc2024_day21::part1(path)?.to_string(),
        (21, Part::Two) => aoc2024_day21::part2(path)?.to_string(),
        (22, Part::One) => aoc2024_day22::part1(path)?.to_string(),
        (22, Part::Two) => aoc2024_day22::part2(path)?.to_string(),
        (23, Part::One) => aoc2024_day23::part1(path)?.to_string(),
        (23, Part::Two) => aoc2024_day23::part2(path)?,
        (24, Part::One) => aoc2024_day24::part1(path)?.ok_or_else(no_answer)?.to_string(),
        (24, Part::Two) => aoc2024_day24::part2(path, SWAP_PAIR_N)?
            .ok_or_else(no_answer)?
            .to_string(),
        (25, Part::One) => aoc2024_day25::part1(path)?.to_string(),
        (25, Part::Two) => return Err(Error::NoPartTwo(2024).into()),
        _ => return Err(Error::Unsolved(2024, day).into()),
    };

    Ok(answer)
}
