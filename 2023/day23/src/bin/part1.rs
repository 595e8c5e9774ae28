use anyhow::{Context, Result};
use aoc2023_day23::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day23::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to find the longest hike in given file({}).",
            args.input_path.display()
        )
    })?;

    match answer {
        Some(steps) => println!("The longest hike with slippery slopes is {} steps long.", steps),
        None => eprintln!("There is no hike from the entrance to the exit."),
    }

    Ok(())
}
