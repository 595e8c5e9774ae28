use anyhow::{Context, Result};
use aoc2023_day25::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let answer = aoc2023_day25::part1(&args.input_path, args.wires).with_context(|| {
        format!(
            "Failed to read wiring diagram in given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(product) = answer {
        println!(
            "The product of the sizes of the two groups after disconnecting {} wire(s) is {}.",
            args.wires, product
        );
    } else {
        eprintln!(
            "Can't split the components into two groups by disconnecting {} wire(s).",
            args.wires
        );
    }

    Ok(())
}
