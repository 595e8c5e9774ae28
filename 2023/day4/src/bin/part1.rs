use anyhow::{Context, Result};
use aoc2023_day4::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day4::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read scratchcards in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The scratchcards are worth {} points in total.", answer);

    Ok(())
}
