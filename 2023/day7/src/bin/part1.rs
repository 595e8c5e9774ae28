use anyhow::{Context, Result};
use aoc2023_day7::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day7::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read hands in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The total winnings of given hands is {}.", answer);

    Ok(())
}
