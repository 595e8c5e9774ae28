use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::{
    api::Client,
    html::{self, SubmitOutcome},
    puzzle::{self, Part, Puzzle},
    registry, template,
};

#[derive(Debug)]
pub enum Error {
    NoArticle(Puzzle),
    MissingInput(PathBuf),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoArticle(p) => write!(f, "Could not find the <article> of {} in the page.", p),
            Error::MissingInput(path) => write!(
                f,
                "Input file({}) doesn't exist, download it first.",
                path.display()
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone)]
pub enum InputSource {
    Puzzle,
    Example,
    File(PathBuf),
}

impl InputSource {
    pub fn path(&self, root: &Path, puzzle: &Puzzle) -> PathBuf {
        match self {
            InputSource::Puzzle => puzzle.input_path(root),
            InputSource::Example => puzzle.example_path(root),
            InputSource::File(path) => path.clone(),
        }
    }
}

pub fn init(root: &Path, client: &Client, puzzle: &Puzzle) -> Result<()> {
    info!("Initialising {}.", puzzle);
    if template::create_day(root, puzzle)? {
        let page = client.fetch_question(puzzle)?;
        let markdown = html::question_markdown(&page).ok_or(Error::NoArticle(*puzzle))?;
        template::save(&puzzle.readme_path(root), &markdown)?;
    }

    download_day(root, client, puzzle)?;
    Ok(())
}

/// Download input of given day, or of every initialised day if day is 0.
pub fn download(root: &Path, client: &Client, year: i32, day: u32) -> Result<usize> {
    let day = puzzle::validate_day_or_all(day)?;
    if day != 0 {
        let puzzle = Puzzle::new(year, day)?;
        return download_day(root, client, &puzzle).map(usize::from);
    }

    let mut download_count = 0;
    for day in 1..=puzzle::LAST_DAY {
        let puzzle = Puzzle::new(year, day)?;
        if !puzzle.dir(root).is_dir() {
            continue;
        }

        if download_day(root, client, &puzzle)? {
            download_count += 1;
        }
    }

    Ok(download_count)
}

fn download_day(root: &Path, client: &Client, puzzle: &Puzzle) -> Result<bool> {
    let input_path = puzzle.input_path(root);
    if input_path.exists() {
        warn!(
            "Skipping download, input file({}) already exists.",
            input_path.display()
        );
        return Ok(false);
    }

    let input = client.fetch_input(puzzle)?;
    template::save(&input_path, &input)?;
    Ok(true)
}

pub fn solve(root: &Path, puzzle: &Puzzle, part: Part, source: &InputSource) -> Result<String> {
    let input_path = source.path(root, puzzle);
    if !input_path.is_file() {
        return Err(Error::MissingInput(input_path).into());
    }

    info!(
        "Solving {} part {} with input({}).",
        puzzle,
        part,
        input_path.display()
    );
    let answer = registry::solve(puzzle.year(), puzzle.day(), part, &input_path)
        .with_context(|| format!("Failed to solve {} part {}.", puzzle, part))?;

    Ok(answer.trim().to_string())
}

pub fn submit(root: &Path, client: &Client, puzzle: &Puzzle, part: Part) -> Result<SubmitOutcome> {
    let answer = solve(root, puzzle, part, &InputSource::Puzzle)?;
    println!("{}", answer);
    let page = client.submit_answer(puzzle, part, &answer)?;
    Ok(html::submit_outcome(&page))
}

pub fn print_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Correct => println!("⭐ That's the right answer!"),
        SubmitOutcome::Rejected(lines) => {
            for l in lines {
                println!("{}", l);
            }
        }
    }
}
