use anyhow::{Context, Result};
use aoc2023_day24::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day24::part1(&args.input_path, args.min, args.max)
        .with_context(|| {
            format!(
                "Failed to count crossing paths in given file({}).",
                args.input_path.display()
            )
        })?;

    println!(
        "There are {} pair(s) of hailstones crossing inside the test area [{}, {}].",
        answer, args.min, args.max
    );

    Ok(())
}
