use anyhow::{Context, Result};
use aoc2023_day8::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let steps_op = aoc2023_day8::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read network from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(steps) = steps_op {
        println!("It takes {} steps to reach ZZZ from AAA.", steps);
    } else {
        eprintln!("ZZZ is unreachable from AAA.");
    }

    Ok(())
}
