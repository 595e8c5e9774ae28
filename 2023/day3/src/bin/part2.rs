use anyhow::{Context, Result};
use aoc2023_day3::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day3::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read engine schematic in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of all gear ratios in the engine schematic is {}.", answer);

    Ok(())
}
