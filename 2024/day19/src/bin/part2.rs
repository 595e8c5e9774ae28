use anyhow::{Context, Result};
use aoc2024_day19::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day19::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read towels and designs in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the number of different ways to make each design is {}.", answer);

    Ok(())
}
