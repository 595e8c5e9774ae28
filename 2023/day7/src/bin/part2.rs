use anyhow::{Context, Result};
use aoc2023_day7::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day7::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read hands in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The total winnings of given hands with J as joker is {}.", answer);

    Ok(())
}
