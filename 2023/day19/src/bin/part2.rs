use anyhow::{Context, Result};
use aoc2023_day19::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let answer = aoc2023_day19::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read workflows in given file({}).",
            args.input_path.display()
        )
    })?;

    println!("There are {} distinct combinations of ratings that will be accepted.", answer);

    Ok(())
}
