use anyhow::{Context, Result};
use aoc2024_day19::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day19::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read towels and designs in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} designs possible with given towel patterns.", answer);

    Ok(())
}
