use anyhow::{Context, Result};
use aoc2024_day23::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2024_day23::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read network map in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("The password to get into the LAN party is {}.", answer);

    Ok(())
}
