use anyhow::{Context, Result};
use aoc2023_day15::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day15::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read initialization sequence in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The focusing power of the resulting lens configuration is {}.", answer);

    Ok(())
}
