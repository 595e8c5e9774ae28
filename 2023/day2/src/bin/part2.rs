use anyhow::{Context, Result};
use aoc2023_day2::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day2::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read games in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the power of minimum cube sets is {}.", answer);

    Ok(())
}
