use anyhow::{Context, Result};
use aoc2023_day12::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day12::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read condition records in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the counts of possible arrangements is {}.", answer);

    Ok(())
}
