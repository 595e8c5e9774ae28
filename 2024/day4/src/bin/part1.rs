use anyhow::{Context, Result};
use aoc2024_day4::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day4::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to search XMAS in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("XMAS appears {} time(s) in given word search.", answer);

    Ok(())
}
