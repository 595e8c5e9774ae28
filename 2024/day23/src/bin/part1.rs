use anyhow::{Context, Result};
use aoc2024_day23::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day23::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read network map in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} sets of three inter-connected computers that contain at least one computer with name starting with t.", answer);

    Ok(())
}
