use anyhow::{Context, Result};
use aoc2024_day13::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day13::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to play claw machines in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("After fixing the unit conversion error, the fewest tokens to win all possible prizes is {}.", answer);

    Ok(())
}
