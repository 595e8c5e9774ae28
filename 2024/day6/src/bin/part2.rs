use anyhow::{Context, Result};
use aoc2024_day6::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day6::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to simulate guard in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} position(s) to put an obstruction that traps the guard in a loop.", answer);

    Ok(())
}
