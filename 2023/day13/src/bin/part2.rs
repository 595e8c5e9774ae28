use anyhow::{Context, Result};
use aoc2023_day13::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day13::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read patterns in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The summary of all notes after fixing smudges is {}.", answer);

    Ok(())
}
