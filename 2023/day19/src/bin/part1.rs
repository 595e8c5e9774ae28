use anyhow::{Context, Result};
use aoc2023_day19::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day19::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read workflows and parts in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of rating numbers of all accepted parts is {}.", answer);

    Ok(())
}
