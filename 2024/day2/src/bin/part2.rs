use anyhow::{Context, Result};
use aoc2024_day2::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let safe_count = aoc2024_day2::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to check reports in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("With the problem dampener, there are {} safe report(s) in given file.", safe_count);

    Ok(())
}
