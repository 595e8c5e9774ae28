use anyhow::{Context, Result};
use aoc2024_day22::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day22::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read secret numbers in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the 2000th secret number generated by each buyer is {}.", answer);

    Ok(())
}
