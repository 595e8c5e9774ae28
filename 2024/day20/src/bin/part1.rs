use anyhow::{Context, Result};
use aoc2024_day20::{CLIArgs, SHORT_CHEAT_TIME};
use clap::Parser;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let count = aoc2024_day20::part1(&args.input_path, args.threshold).with_context(|| {
        format!(
            "Failed to read racetrack from given file({}).",
            args.input_path.display()
        )
    })?;

    println!(
        "There are {} cheat(s) lasting at most {} picoseconds that save at least {} picoseconds.",
        count, SHORT_CHEAT_TIME, args.threshold
    );

    Ok(())
}
