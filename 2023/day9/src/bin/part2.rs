use anyhow::{Context, Result};
use aoc2023_day9::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day9::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read histories in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The sum of the extrapolated previous values is {}.", answer);

    Ok(())
}
