use anyhow::{Context, Result};
use aoc2024_day7::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day7::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to calibrate equations in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The total calibration result with add and multiply operators is {}.", answer);

    Ok(())
}
