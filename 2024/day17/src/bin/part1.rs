use anyhow::{Context, Result};
use aoc2024_day17::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day17::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to run program in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The output of given program joined with commas is {}.", answer);

    Ok(())
}
