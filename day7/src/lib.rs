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
    InvalidPositionText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPositionText(s) => {
                write!(f, "Invalid text({}) for crab position.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn min_constant_fuel(positions: &[i64]) -> Option<i64> {
    min_fuel(positions, |distance| distance)
}

pub fn min_triangular_fuel(positions: &[i64]) -> Option<i64> {
    min_fuel(positions, |distance| distance * (distance + 1) / 2)
}

fn min_fuel(positions: &[i64], burn: impl Fn(i64) -> i64) -> Option<i64> {
    let min_pos = *positions.iter().min()?;
    let max_pos = *positions.iter().max()?;
    (min_pos..=max_pos)
        .map(|target| {
            positions
                .iter()
                .map(|pos| burn((pos - target).abs()))
                .sum::<i64>()
        })
        .min()
}

pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut positions = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        for text in line.trim().split(',') {
            let pos = text
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidPositionText(text.to_string()))?;
            positions.push(pos);
        }
    }

    Ok(positions)
}
