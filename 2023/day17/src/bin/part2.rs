use anyhow::{Context, Result};
use aoc2023_day17::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let loss_op = aoc2023_day17::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to read heat loss map from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(loss) = loss_op {
        println!("The least heat loss the ultra crucible can incur is {}.", loss);
    } else {
        eprintln!("The ultra crucible can't reach the machine parts factory.");
    }

    Ok(())
}
