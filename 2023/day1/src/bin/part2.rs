use anyhow::{Context, Result};
use aoc2023_day1::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day1::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read calibration document in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of all calibration values with spelled digits is {}.", answer);

    Ok(())
}
