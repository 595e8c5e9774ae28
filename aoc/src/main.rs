use std::{io, path::PathBuf};

use anyhow::Result;
use aoc::{
    api::Client,
    commands::{self, InputSource},
    interactive::{self, Action},
    puzzle::{self, Part, Puzzle},
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};

#[derive(Debug, Parser)]
#[command(name = "aoc", version, about = "🎄 Advent of Code command-line tool")]
struct CLIArgs {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Session cookie of adventofcode.com
    #[arg(long, env = "SESSION_TOKEN", global = true, hide_env_values = true)]
    session: Option<String>,
    /// Folder holding the year folders
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a template folder for a specific day
    Init(DayArgs),
    /// Download puzzle inputs for specific year/day
    Download(DownloadArgs),
    /// Run the solution for a specific day
    Solve(SolveArgs),
    /// Submit an answer for a specific day
    Submit(PartArgs),
}

#[derive(Debug, Args)]
struct DayArgs {
    #[arg(short, long)]
    year: Option<i32>,
    #[arg(short, long)]
    day: Option<u32>,
}

#[derive(Debug, Args)]
struct DownloadArgs {
    #[arg(short, long)]
    year: Option<i32>,
    /// 0 downloads every initialised day of the year
    #[arg(short, long, default_value_t = 0)]
    day: u32,
}

#[derive(Debug, Args)]
struct PartArgs {
    #[command(flatten)]
    day: DayArgs,
    #[arg(short, long, default_value_t = 1)]
    part: u8,
}

#[derive(Debug, Args)]
struct SolveArgs {
    #[command(flatten)]
    part: PartArgs,
    /// Use the example input in tests/example.txt
    #[arg(short, long, conflicts_with = "input")]
    example: bool,
    /// Use given input file
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl DayArgs {
    fn puzzle(&self, today: NaiveDate) -> Result<Puzzle> {
        let year = self.year.unwrap_or_else(|| puzzle::default_year(today));
        let day = puzzle::resolve_day(self.day, today)?;
        Ok(Puzzle::new(year, day)?)
    }
}

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let level = if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let today = Local::now().date_naive();
    let client = || Client::new(args.session.as_deref());
    match &args.command {
        Some(Command::Init(day_args)) => {
            let puzzle = day_args.puzzle(today)?;
            commands::init(&args.root, &client()?, &puzzle)?;
        }
        Some(Command::Download(download_args)) => {
            let year = puzzle::validate_year(
                download_args
                    .year
                    .unwrap_or_else(|| puzzle::default_year(today)),
            )?;
            let count = commands::download(&args.root, &client()?, year, download_args.day)?;
            info!("Downloaded {} input file(s).", count);
        }
        Some(Command::Solve(solve_args)) => {
            let puzzle = solve_args.part.day.puzzle(today)?;
            let part = Part::try_from(solve_args.part.part)?;
            let source = match (&solve_args.input, solve_args.example) {
                (Some(path), _) => InputSource::File(path.clone()),
                (None, true) => InputSource::Example,
                (None, false) => InputSource::Puzzle,
            };
            println!("{}", commands::solve(&args.root, &puzzle, part, &source)?);
        }
        Some(Command::Submit(part_args)) => {
            let puzzle = part_args.day.puzzle(today)?;
            let part = Part::try_from(part_args.part)?;
            let outcome = commands::submit(&args.root, &client()?, &puzzle, part)?;
            commands::print_outcome(&outcome);
        }
        None => {
            let stdin = io::stdin();
            let Some(choice) = interactive::prompt(&mut stdin.lock(), &mut io::stdout(), today)?
            else {
                return Ok(());
            };

            let puzzle = Puzzle::new(choice.year, choice.day)?;
            let part = choice.part.unwrap_or(Part::One);
            match choice.action {
                Action::Initialise => commands::init(&args.root, &client()?, &puzzle)?,
                Action::Download => {
                    commands::download(&args.root, &client()?, puzzle.year(), puzzle.day())?;
                }
                Action::Solve => {
                    println!(
                        "{}",
                        commands::solve(&args.root, &puzzle, part, &InputSource::Puzzle)?
                    );
                }
                Action::Submit => {
                    let outcome = commands::submit(&args.root, &client()?, &puzzle, part)?;
                    commands::print_outcome(&outcome);
                }
                Action::Exit => {}
            }
        }
    }

    Ok(())
}
