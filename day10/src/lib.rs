use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidChar(c) => write!(f, "Invalid character({}) for chunk line.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LineCheck {
    Legal,
    Corrupted(char),
    Incomplete(Vec<char>),
}

pub fn check_line(line: &str) -> Result<LineCheck, Error> {
    let mut open_stack = Vec::new();
    for c in line.chars() {
        match c {
            '(' | '[' | '{' | '<' => open_stack.push(c),
            ')' | ']' | '}' | '>' => {
                if open_stack.pop().map(closer_of) != Some(c) {
                    return Ok(LineCheck::Corrupted(c));
                }
            }
            other => return Err(Error::InvalidChar(other)),
        }
    }

    if open_stack.is_empty() {
        Ok(LineCheck::Legal)
    } else {
        Ok(LineCheck::Incomplete(open_stack))
    }
}

pub fn corruption_score(corrupted_char: char) -> u64 {
    match corrupted_char {
        ')' => 3,
        ']' => 57,
        '}' => 1197,
        '>' => 25137,
        _ => 0,
    }
}

pub fn completion_score(open_stack: &[char]) -> u64 {
    open_stack.iter().rev().fold(0, |score, open| {
        score * 5
            + match closer_of(*open) {
                ')' => 1,
                ']' => 2,
                '}' => 3,
                '>' => 4,
                _ => 0,
            }
    })
}

fn closer_of(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        lines.push(line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    Ok(lines)
}
