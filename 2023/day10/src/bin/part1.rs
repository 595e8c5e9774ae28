use anyhow::{Context, Result};
use aoc2023_day10::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day10::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipe map in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("It takes {} steps to get from the starting position to the farthest point of the loop.", answer);

    Ok(())
}
