use anyhow::{Context, Result};
use aoc2023_day22::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day22::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read bricks in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} bricks that could be safely chosen as the one to get disintegrated.", answer);

    Ok(())
}
