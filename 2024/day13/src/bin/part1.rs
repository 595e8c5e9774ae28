use anyhow::{Context, Result};
use aoc2024_day13::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day13::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to play claw machines in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The fewest tokens to win all possible prizes is {}.", answer);

    Ok(())
}
