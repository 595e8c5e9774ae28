use anyhow::{Context, Result};
use aoc2024_day24::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let output_op = aoc2024_day24::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to read circuit from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(output) = output_op {
        println!("The decimal number output on the wires starting with z is {}.", output);
    } else {
        eprintln!("Some wires starting with z never get a value.");
    }

    Ok(())
}
