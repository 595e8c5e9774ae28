use anyhow::{Context, Result};
use aoc2024_day22::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day22::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read secret numbers in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The most bananas you can get is {}.", answer);

    Ok(())
}
