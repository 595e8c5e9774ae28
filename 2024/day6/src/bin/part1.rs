use anyhow::{Context, Result};
use aoc2024_day6::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day6::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to simulate guard in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The guard visits {} distinct position(s) before leaving the map.", answer);

    Ok(())
}
