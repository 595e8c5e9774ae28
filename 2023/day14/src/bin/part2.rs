use anyhow::{Context, Result};
use aoc2023_day14::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day14::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read platform in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The total load on the north support beams after 1000000000 spin cycles is {}.", answer);

    Ok(())
}
