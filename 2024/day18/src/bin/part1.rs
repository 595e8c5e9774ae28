use anyhow::{Context, Result};
use aoc2024_day18::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let steps_op = aoc2024_day18::part1(&args.input_path, args.size, args.bytes)
        .with_context(|| {
            format!(
                "Failed to read falling bytes from given file({}).",
                args.input_path.display()
            )
        })?;

    if let Some(steps) = steps_op {
        println!(
            "After {} byte(s) fell, the minimum number of steps needed to reach the exit is {}.",
            args.bytes, steps
        );
    } else {
        eprintln!("The exit is unreachable after {} byte(s) fell.", args.bytes);
    }

    Ok(())
}
