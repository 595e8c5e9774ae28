use std::{
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidDigit(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDigit(c) => write!(f, "Invalid character({}) in disk map.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug)]
pub struct DiskMap {
    files: Vec<Span>,
    frees: Vec<Span>,
}

impl TryFrom<&str> for DiskMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut files = Vec::new();
        let mut frees = Vec::new();
        let mut start = 0;
        for (ind, c) in value.trim().chars().enumerate() {
            let len = c.to_digit(10).ok_or(Error::InvalidDigit(c))? as usize;
            let span = Span { start, len };
            if ind % 2 == 0 {
                files.push(span);
            } else {
                frees.push(span);
            }
            start += len;
        }

        Ok(Self { files, frees })
    }
}

impl DiskMap {
    pub fn compact_blocks_checksum(&self) -> usize {
        let mut blocks = Vec::new();
        for (id, file) in self.files.iter().enumerate() {
            blocks.resize(file.start, None);
            blocks.extend(std::iter::repeat(Some(id)).take(file.len));
        }

        let mut left = 0;
        let mut right = blocks.len();
        loop {
            while left < right && blocks[left].is_some() {
                left += 1;
            }
            while right > left && blocks[right - 1].is_none() {
                right -= 1;
            }
            if left + 1 >= right {
                break;
            }

            blocks.swap(left, right - 1);
        }

        blocks
            .iter()
            .enumerate()
            .map(|(pos, id_op)| id_op.map(|id| pos * id).unwrap_or(0))
            .sum()
    }

    pub fn compact_files_checksum(&self) -> usize {
        let mut files = self.files.clone();
        let mut frees = self.frees.clone();
        for file in files.iter_mut().rev() {
            let (file_start, file_len) = (file.start, file.len);
            if let Some(free) = frees
                .iter_mut()
                .take_while(|free| free.start < file_start)
                .find(|free| free.len >= file_len)
            {
                file.start = free.start;
                free.start += file.len;
                free.len -= file.len;
            }
        }

        files
            .iter()
            .enumerate()
            .map(|(id, file)| (file.start..(file.start + file.len)).sum::<usize>() * id)
            .sum()
    }
}

pub fn read_disk_map<P: AsRef<Path>>(path: P) -> Result<DiskMap> {
    let text = common::input::read_text(&path)?;
    DiskMap::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse disk map in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_disk_map(path)?.compact_blocks_checksum())
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_disk_map(path)?.compact_files_checksum())
}
