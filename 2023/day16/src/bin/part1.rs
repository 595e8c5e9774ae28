use anyhow::{Context, Result};
use aoc2023_day16::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day16::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read contraption in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} tiles energized when the beam enters from the top-left corner heading right.", answer);

    Ok(())
}
