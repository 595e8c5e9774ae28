use anyhow::{Context, Result};
use aoc2024_day11::CLIArgs;
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let stones = aoc2024_day11::read_stones(&args.input_path).with_context(|| {
        format!(
            "Failed to read stones from given file({}).",
            args.input_path.display()
        )
    })?;

    let blink_count = args.blink_count.unwrap_or(75);
    let stone_count = stones.count_after(blink_count);
    println!(
        "After {} blink(s), the number of given stones changes to {}.",
        blink_count, stone_count,
    );

    Ok(())
}
