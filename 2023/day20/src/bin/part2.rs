use anyhow::{Context, Result};
use aoc2023_day20::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let press_n_op = aoc2023_day20::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read module configuration from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(press_n) = press_n_op {
        println!(
            "The fewest number of button presses required to deliver a single low pulse to rx is {}.",
            press_n
        );
    } else {
        eprintln!("Module rx never receives a low pulse.");
    }

    Ok(())
}
