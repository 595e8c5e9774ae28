use anyhow::{Context, Result};
use aoc2023_day22::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day22::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read bricks in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the number of other bricks that would fall for each disintegrated brick is {}.", answer);

    Ok(())
}
