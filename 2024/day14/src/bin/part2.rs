use anyhow::{Context, Result};
use aoc2024_day14::{CLIArgs, Room};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let room = Room::new(args.width, args.height);
    let second_op = aoc2024_day14::part2(&args.input_path, &room).with_context(|| {
        format!(
            "Failed to read robots from given file({}).",
            args.input_path.display()
        )
    })?;

    if let Some(second) = second_op {
        println!(
            "The fewest seconds for robots to display the Easter egg is {}.",
            second
        );
    } else {
        eprintln!("Robots never spread out to display the Easter egg.");
    }

    Ok(())
}
