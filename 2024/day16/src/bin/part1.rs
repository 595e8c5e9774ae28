use anyhow::{Context, Result};
use aoc2024_day16::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let maze = aoc2024_day16::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(score) = maze.min_score() {
        println!("The lowest score a reindeer could possibly get is {}.", score);
    } else {
        eprintln!("There're no actions can complete the given maze.");
    }

    Ok(())
}
