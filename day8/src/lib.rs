use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const PATTERN_N: usize = 10;
const OUTPUT_N: usize = 4;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NoBarInEntryText(String),
    InvalidCharForSegment(char),
    WrongPatternN(usize, usize),
    WrongOutputN(usize, usize),
    UndecodableEntry,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoBarInEntryText(s) => write!(
                f,
                "Expect a bar between signal patterns and outputs in text({}).",
                s
            ),
            Error::InvalidCharForSegment(c) => {
                write!(f, "Invalid character({}) for segment, expect a to g.", c)
            }
            Error::WrongPatternN(expect_n, this_n) => write!(
                f,
                "Expect {} signal pattern(s) in each entry, given {}.",
                expect_n, this_n
            ),
            Error::WrongOutputN(expect_n, this_n) => write!(
                f,
                "Expect {} output digit(s) in each entry, given {}.",
                expect_n, this_n
            ),
            Error::UndecodableEntry => {
                write!(f, "Given entry can not be decoded to a unique wiring.")
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct DisplayEntry {
    patterns: Vec<u8>,
    outputs: Vec<u8>,
}

impl TryFrom<&str> for DisplayEntry {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let bar_ind = value
            .find('|')
            .ok_or_else(|| Error::NoBarInEntryText(value.to_string()))?;
        let patterns = parse_patterns(&value[..bar_ind])?;
        if patterns.len() != PATTERN_N {
            return Err(Error::WrongPatternN(PATTERN_N, patterns.len()));
        }

        let outputs = parse_patterns(&value[(bar_ind + 1)..])?;
        if outputs.len() != OUTPUT_N {
            return Err(Error::WrongOutputN(OUTPUT_N, outputs.len()));
        }

        Ok(DisplayEntry { patterns, outputs })
    }
}

impl DisplayEntry {
    pub fn unique_len_output_n(&self) -> usize {
        self.outputs
            .iter()
            .filter(|pattern| matches!(pattern.count_ones(), 2 | 3 | 4 | 7))
            .count()
    }

    pub fn decode_output(&self) -> Result<usize, Error> {
        let one = self.unique_len_pattern(2)?;
        let four = self.unique_len_pattern(4)?;
        let seven = self.unique_len_pattern(3)?;
        let eight = self.unique_len_pattern(7)?;

        let nine = self.search_pattern(|p| p.count_ones() == 6 && p & four == four)?;
        let six = self.search_pattern(|p| p.count_ones() == 6 && p & one != one)?;
        let zero = self.search_pattern(|p| p.count_ones() == 6 && p != nine && p != six)?;
        let three = self.search_pattern(|p| p.count_ones() == 5 && p & one == one)?;
        let five = self.search_pattern(|p| p.count_ones() == 5 && p & six == p)?;
        let two = self.search_pattern(|p| p.count_ones() == 5 && p != three && p != five)?;

        let digits = [zero, one, two, three, four, five, six, seven, eight, nine];
        let mut value = 0;
        for output in &self.outputs {
            let digit = digits
                .iter()
                .position(|pattern| pattern == output)
                .ok_or(Error::UndecodableEntry)?;
            value = value * 10 + digit;
        }

        Ok(value)
    }

    fn unique_len_pattern(&self, seg_n: u32) -> Result<u8, Error> {
        self.search_pattern(|p| p.count_ones() == seg_n)
    }

    fn search_pattern(&self, pred: impl Fn(u8) -> bool) -> Result<u8, Error> {
        self.patterns
            .iter()
            .copied()
            .find(|pattern| pred(*pattern))
            .ok_or(Error::UndecodableEntry)
    }
}

fn parse_patterns(text: &str) -> Result<Vec<u8>, Error> {
    text.split_whitespace().map(parse_pattern).collect()
}

fn parse_pattern(text: &str) -> Result<u8, Error> {
    let mut pattern = 0u8;
    for c in text.chars() {
        if !c.is_ascii_lowercase() || c > 'g' {
            return Err(Error::InvalidCharForSegment(c));
        }

        pattern |= 1 << (c as u8 - b'a');
    }

    Ok(pattern)
}

pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<DisplayEntry>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        entries.push(DisplayEntry::try_from(line.as_str())?);
    }

    Ok(entries)
}
