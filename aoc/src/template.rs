use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::puzzle::Puzzle;

const CARGO_TEMPLATE: &str = include_str!("../templates/Cargo.toml.tmpl");
const LIB_TEMPLATE: &str = include_str!("../templates/lib.rs.tmpl");
const PART1_TEMPLATE: &str = include_str!("../templates/part1.rs.tmpl");
const PART2_TEMPLATE: &str = include_str!("../templates/part2.rs.tmpl");
const TEST_PART1_TEMPLATE: &str = include_str!("../templates/test_part1.rs.tmpl");
const TEST_PART2_TEMPLATE: &str = include_str!("../templates/test_part2.rs.tmpl");

pub fn render(template: &str, puzzle: &Puzzle) -> String {
    template
        .replace("{{year}}", &puzzle.year().to_string())
        .replace("{{day}}", &puzzle.day().to_string())
}

/// Lay out a new day crate, returns false if its folder already exists.
pub fn create_day(root: &Path, puzzle: &Puzzle) -> Result<bool> {
    let dir = puzzle.dir(root);
    if dir.is_dir() {
        warn!("Skipping template, folder({}) already exists.", dir.display());
        return Ok(false);
    }

    info!(
        "Creating crate {} for {} in {}.",
        puzzle.crate_name(),
        puzzle,
        dir.display()
    );
    let files = [
        ("Cargo.toml", CARGO_TEMPLATE),
        ("src/lib.rs", LIB_TEMPLATE),
        ("src/bin/part1.rs", PART1_TEMPLATE),
        ("src/bin/part2.rs", PART2_TEMPLATE),
        ("tests/part1.rs", TEST_PART1_TEMPLATE),
        ("tests/part2.rs", TEST_PART2_TEMPLATE),
        ("tests/example.txt", ""),
    ];
    for (rel_path, template) in files {
        save(&dir.join(rel_path), &render(template, puzzle))?;
    }

    Ok(true)
}

pub fn save(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create folder({}).", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("Failed to write file({}).", path.display()))
}
