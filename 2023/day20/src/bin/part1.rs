use anyhow::{Context, Result};
use aoc2023_day20::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day20::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read module configuration in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The product of the total numbers of low and high pulses sent after pushing the button 1000 times is {}.", answer);

    Ok(())
}
