use anyhow::{Context, Result};
use aoc2024_day12::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day12::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to price fences in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The total price of fencing all regions with bulk discount is {}.", answer);

    Ok(())
}
