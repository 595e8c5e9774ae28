use anyhow::{Context, Result};
use aoc2023_day6::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day6::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read race sheet in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} ways to beat the record in the one much longer race.", answer);

    Ok(())
}
