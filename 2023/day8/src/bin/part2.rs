use anyhow::{Context, Result};
use aoc2023_day8::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let steps_op = aoc2023_day8::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read network from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(steps) = steps_op {
        println!("It takes {} steps before all ghosts are on nodes ending with Z.", steps);
    } else {
        eprintln!("Ghosts never end up on nodes ending with Z at the same time.");
    }

    Ok(())
}
