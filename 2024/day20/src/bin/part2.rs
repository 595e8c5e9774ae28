use anyhow::{Context, Result};
use aoc2024_day20::{CLIArgs, LONG_CHEAT_TIME};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let count = aoc2024_day20::part2(&args.input_path, args.threshold).with_context(|| {
        format!(
            "Failed to read racetrack from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "There are {} cheat(s) lasting at most {} picoseconds that save at least {} picoseconds.",
        count, LONG_CHEAT_TIME, args.threshold
    );

    Ok(())
}
