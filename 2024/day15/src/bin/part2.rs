use anyhow::{Context, Result};
use aoc2024_day15::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day15::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to simulate robot in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("In the scaled-up warehouse, the sum of all boxes' GPS coordinates is {}.", answer);

    Ok(())
}
