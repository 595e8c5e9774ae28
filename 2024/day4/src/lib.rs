use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use common::grid::{Grid, Position, EIGHT_OFFSETS};

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub struct WordSearch {
    letters: Grid<char>,
}

impl WordSearch {
    pub fn count_word(&self, word: &str) -> usize {
        let chars = word.chars().collect::<Vec<_>>();
        let Some(first) = chars.first() else {
            return 0;
        };

        self.letters
            .find_all(|c| c == first)
            .into_iter()
            .map(|start| {
                EIGHT_OFFSETS
                    .iter()
                    .filter(|(dr, dc)| self.matches_from(&start, *dr, *dc, &chars))
                    .count()
            })
            .sum()
    }

    pub fn count_x_mas(&self) -> usize {
        self.letters
            .find_all(|c| *c == 'A')
            .into_iter()
            .filter(|center| {
                let is_mas = |(dr0, dc0): (isize, isize), (dr1, dc1): (isize, isize)| {
                    let end0 = self.letter_at(center, dr0, dc0);
                    let end1 = self.letter_at(center, dr1, dc1);
                    matches!((end0, end1), (Some('M'), Some('S')) | (Some('S'), Some('M')))
                };
                is_mas((-1, -1), (1, 1)) && is_mas((-1, 1), (1, -1))
            })
            .count()
    }

    fn matches_from(&self, start: &Position, dr: isize, dc: isize, chars: &[char]) -> bool {
        chars.iter().enumerate().all(|(step, c)| {
            let step = step as isize;
            self.letter_at(start, dr * step, dc * step) == Some(*c)
        })
    }

    fn letter_at(&self, pos: &Position, dr: isize, dc: isize) -> Option<char> {
        self.letters
            .offset(pos, dr, dc)
            .and_then(|p| self.letters.get(&p).copied())
    }
}

pub fn read_word_search<P: AsRef<Path>>(path: P) -> Result<WordSearch> {
    let text = common::input::read_text(&path)?;
    let letters = Grid::parse_chars(&text).with_context(|| {
        format!(
            "Failed to parse word search in given file({}).",
            path.as_ref().display()
        )
    })?;

    Ok(WordSearch { letters })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_word_search(path)?.count_word("XMAS"))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_word_search(path)?.count_x_mas())
}
