use anyhow::{Context, Result};
use aoc2024_day10::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day10::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to score trailheads in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of scores of all trailheads is {}.", answer);

    Ok(())
}
