use anyhow::{Context, Result};
use aoc2023_day5::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let location_op = aoc2023_day5::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read almanac from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(location) = location_op {
        println!(
            "The lowest location number that corresponds to any of the initial seeds is {}.",
            location
        );
    } else {
        eprintln!("No seeds given in almanac.");
    }

    Ok(())
}
