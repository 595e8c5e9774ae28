use anyhow::{Context, Result};
use aoc2023_day4::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day4::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read scratchcards in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("You end up with {} scratchcards in total.", answer);

    Ok(())
}
