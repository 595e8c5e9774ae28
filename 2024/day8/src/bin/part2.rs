use anyhow::{Context, Result};
use aoc2024_day8::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day8::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to locate antinodes in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("With resonant harmonics, there are {} unique location(s) containing an antinode.", answer);

    Ok(())
}
