use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;

use crate::puzzle::{self, Part};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Initialise,
    Download,
    Solve,
    Submit,
    Exit,
}

impl Action {
    fn all() -> [Action; 5] {
        [
            Action::Initialise,
            Action::Download,
            Action::Solve,
            Action::Submit,
            Action::Exit,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Action::Initialise => "Initialise",
            Action::Download => "Download",
            Action::Solve => "Solve",
            Action::Submit => "Submit",
            Action::Exit => "Exit",
        }
    }

    fn needs_part(&self) -> bool {
        matches!(self, Action::Solve | Action::Submit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub action: Action,
    pub year: i32,
    pub day: u32,
    pub part: Option<Part>,
}

/// Ask for what to do, `None` when user exits or input ends.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    today: NaiveDate,
) -> Result<Option<Choice>> {
    writeln!(output, "\n🎄🎄🎄 Advent of Code 🎄🎄🎄")?;
    writeln!(output, "----------------------------")?;

    let actions = Action::all();
    let labels = actions.iter().map(|a| a.label().to_string()).collect::<Vec<_>>();
    let Some(action_ind) = select(input, output, "What would you like to do?", &labels)? else {
        return Ok(None);
    };
    let action = actions[action_ind];
    if action == Action::Exit {
        return Ok(None);
    }

    let years = (puzzle::FIRST_YEAR..=puzzle::default_year(today))
        .rev()
        .collect::<Vec<_>>();
    let year_labels = years.iter().map(|y| y.to_string()).collect::<Vec<_>>();
    let Some(year_ind) = select(input, output, "Which year?", &year_labels)? else {
        return Ok(None);
    };

    let Some(day) = prompt_day(input, output)? else {
        return Ok(None);
    };

    let part = if action.needs_part() {
        let Some(part_ind) = select(input, output, "Which part?", &["1".into(), "2".into()])?
        else {
            return Ok(None);
        };
        Some(if part_ind == 0 { Part::One } else { Part::Two })
    } else {
        None
    };

    Ok(Some(Choice {
        action,
        year: years[year_ind],
        day,
        part,
    }))
}

fn select<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    items: &[String],
) -> Result<Option<usize>> {
    loop {
        writeln!(output, "{}", label)?;
        for (ind, item) in items.iter().enumerate() {
            writeln!(output, "  {}) {}", ind + 1, item)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(0));
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(output, "Please pick a number between 1 and {}.", items.len())?,
        }
    }
}

fn prompt_day<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<u32>> {
    loop {
        write!(output, "Day: ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.parse::<u32>() {
            Ok(day) if (1..=puzzle::LAST_DAY).contains(&day) => return Ok(Some(day)),
            _ => writeln!(output, "Invalid day (must be between 1 and 25).")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
