use anyhow::{Context, Result};
use aoc2024_day3::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day3::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read instructions in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The total sum of correct multiply instructions is {}.", answer);

    Ok(())
}
