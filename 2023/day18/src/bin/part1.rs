use anyhow::{Context, Result};
use aoc2023_day18::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day18::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read dig plan in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The lagoon could hold {} cubic meters of lava.", answer);

    Ok(())
}
