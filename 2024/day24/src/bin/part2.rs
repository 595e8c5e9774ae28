use anyhow::{Context, Result};
use aoc2024_day24::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let wires_op = aoc2024_day24::part2(&args.input_path, args.pairs).with_context(|| {
        format!(
            "Failed to repair circuit from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(wires) = wires_op {
        println!(
            "The names of the wires involved in swaps sorted and joined with commas are {}.",
            wires
        );
    } else {
        eprintln!(
            "Can't make the circuit add up by swapping {} pair(s) of gate outputs.",
            args.pairs
        );
    }

    Ok(())
}
