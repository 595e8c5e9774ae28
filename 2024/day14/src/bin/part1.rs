use anyhow::{Context, Result};
use aoc2024_day14::{CLIArgs, Room};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let room = Room::new(args.width, args.height);
    let factor = aoc2024_day14::part1(&args.input_path, &room).with_context(|| {
        format!(
            "Failed to read robots from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "The security factor(product of robots's count after moved in 4 quadrants) is {}.",
        factor
    );

    Ok(())
}
