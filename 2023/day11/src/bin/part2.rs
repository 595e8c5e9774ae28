use anyhow::{Context, Result};
use aoc2023_day11::{CLIArgs, OLD_EXPANSION};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let factor = args.factor.unwrap_or(OLD_EXPANSION);
    let sum = aoc2023_day11::part2(&args.input_path, factor).with_context(|| {
        format!(
            "Failed to read image from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "When empty rows and columns grow {} times, the sum of lengths of shortest paths between every pair of galaxies is {}.",
        factor, sum
    );

    Ok(())
}
