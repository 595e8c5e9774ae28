use anyhow::{Context, Result};
use aoc2023_day6::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day6::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read race sheet in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The product of the numbers of ways to beat the record in each race is {}.", answer);

    Ok(())
}
