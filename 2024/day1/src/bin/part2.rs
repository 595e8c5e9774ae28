use anyhow::{Context, Result};
use aoc2024_day1::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let lists = aoc2024_day1::read_lists(&args.input_path).with_context(|| {
        format!(
            "Failed to read location ID lists from given input file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The similarity score between two given list is {}.",
        lists.similarity_score()
    );

    Ok(())
}
