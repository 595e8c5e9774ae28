use anyhow::{Context, Result};
use aoc2024_day25::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day25::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read keys and locks in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There is(are) {} unique lock/key pair(s) that fit together without overlapping in any column.", answer);

    Ok(())
}
