use anyhow::{Context, Result};
use aoc2024_day10::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day10::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to rate trailheads in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of ratings of all trailheads is {}.", answer);

    Ok(())
}
