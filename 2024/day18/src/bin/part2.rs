use anyhow::{Context, Result};
use aoc2024_day18::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let byte_op = aoc2024_day18::part2(&args.input_path, args.size).with_context(|| {
        format!(
            "Failed to read falling bytes from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(byte) = byte_op {
        println!(
            "The coordinates of the first byte that prevents the exit from being reachable is {}.",
            byte
        );
    } else {
        eprintln!("The exit is always reachable.");
    }

    Ok(())
}
