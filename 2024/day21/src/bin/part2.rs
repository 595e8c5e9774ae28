use anyhow::{Context, Result};
use aoc2024_day21::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day21::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read door codes in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("With 25 robots on directional keypads, the sum of the complexities of given codes is {}.", answer);

    Ok(())
}
