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
    InvalidDepthText(String),
    ZeroWindow,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDepthText(s) => write!(f, "Invalid text({}) for depth.", s),
            Error::ZeroWindow => write!(f, "Given window size is 0, expect a positive size."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn count_increases(depths: &[usize], win_size: usize) -> Result<usize, Error> {
    if win_size == 0 {
        return Err(Error::ZeroWindow);
    }

    if depths.len() < win_size {
        return Ok(0);
    }

    let win_sums = depths
        .windows(win_size)
        .map(|win| win.iter().sum::<usize>())
        .collect::<Vec<_>>();

    Ok(win_sums.windows(2).filter(|pair| pair[1] > pair[0]).count())
}

pub fn read_depths<P: AsRef<Path>>(path: P) -> Result<Vec<usize>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut depths = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let depth = line
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidDepthText(line.clone()))?;
        depths.push(depth);
    }

    Ok(depths)
}
