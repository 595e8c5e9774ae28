use anyhow::{Context, Result};
use aoc2024_day9::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day9::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to compact disk in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The filesystem checksum after moving whole files is {}.", answer);

    Ok(())
}
