use anyhow::{Context, Result};
use aoc2023_day12::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day12::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read condition records in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("After unfolding, the sum of the counts of possible arrangements is {}.", answer);

    Ok(())
}
