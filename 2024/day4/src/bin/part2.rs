use anyhow::{Context, Result};
use aoc2024_day4::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day4::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to search X-MAS in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("X-MAS appears {} time(s) in given word search.", answer);

    Ok(())
}
