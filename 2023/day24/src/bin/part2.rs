use anyhow::{Context, Result};
use aoc2023_day24::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day24::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to find the perfect throw in given file({}).",
            args.input_path.display()
        )
    })?;

    match answer {
        Some(sum) => println!(
            "The sum of coordinates of the rock's initial position is {}.",
            sum
        ),
        None => eprintln!("There is no throw hitting every hailstone."),
    }

    Ok(())
}
