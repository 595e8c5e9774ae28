use anyhow::{Context, Result};
use aoc2024_day17::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let a_op = aoc2024_day17::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to search register A in given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(a) = a_op {
        println!(
            "The lowest initial value for register A that makes the program output itself is {}.",
            a
        );
    } else {
        eprintln!("No initial value for register A makes the program output itself.");
    }

    Ok(())
}
