use anyhow::{Context, Result};
use aoc2023_day15::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day15::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read initialization sequence in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of HASH results of all steps is {}.", answer);

    Ok(())
}
