use anyhow::{Context, Result};
use aoc2023_day10::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day10::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipe map in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} tiles enclosed by the loop.", answer);

    Ok(())
}
