use anyhow::{Context, Result};
use aoc2023_day21::{CLIArgs, SHORT_STEP_N};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let step_n = args.steps.unwrap_or(SHORT_STEP_N);
    let count = aoc2023_day21::part1(&args.input_path, step_n).with_context(|| {
        format!(
            "Failed to read garden map from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The elf can reach {} garden plots in the garden in exactly {} steps.",
        count, step_n
    );

    Ok(())
}
