use anyhow::{Context, Result};
use aoc2024_day15::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day15::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to simulate robot in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of all boxes' GPS coordinates after the robot finishes moving is {}.", answer);

    Ok(())
}
