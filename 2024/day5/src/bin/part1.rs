use anyhow::{Context, Result};
use aoc2024_day5::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day5::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read print queue in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of middle page numbers of correctly-ordered updates is {}.", answer);

    Ok(())
}
