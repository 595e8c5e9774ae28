use anyhow::{Context, Result};
use aoc2023_day2::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day2::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read games in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the IDs of possible games is {}.", answer);

    Ok(())
}
