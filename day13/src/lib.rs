use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NoCommaInDotText(String),
    InvalidCoordinateText(String),
    InvalidLineText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCommaInDotText(s) => write!(
                f,
                "Expect a comma to separate coordinates of dot in text({}).",
                s
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of dot.", s)
            }
            Error::InvalidLineText(s) => {
                write!(f, "Invalid text({}) for dot or fold instruction.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dot {
    x: i64,
    y: i64,
}

impl TryFrom<&str> for Dot {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let comma_ind = value
            .find(',')
            .ok_or_else(|| Error::NoCommaInDotText(value.to_string()))?;
        let x = parse_coordinate(&value[..comma_ind])?;
        let y = parse_coordinate(&value[(comma_ind + 1)..])?;

        Ok(Dot { x, y })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    AlongX(i64),
    AlongY(i64),
}

impl Fold {
    fn try_from_line(text: &str) -> Option<Self> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"fold along ([xy])=(\d+)").unwrap());

        PATTERN.captures(text).map(|caps| {
            let value = caps[2].parse::<i64>().unwrap();
            match &caps[1] {
                "x" => Fold::AlongX(value),
                _ => Fold::AlongY(value),
            }
        })
    }
}

#[derive(Debug)]
pub struct Paper {
    dots: HashSet<Dot>,
}

impl Paper {
    pub fn dot_n(&self) -> usize {
        self.dots.len()
    }

    pub fn fold(&mut self, fold: Fold) {
        self.dots = self
            .dots
            .iter()
            .map(|dot| match fold {
                Fold::AlongX(value) if dot.x > value => Dot {
                    x: 2 * value - dot.x,
                    y: dot.y,
                },
                Fold::AlongY(value) if dot.y > value => Dot {
                    x: dot.x,
                    y: 2 * value - dot.y,
                },
                _ => *dot,
            })
            .collect();
    }
}

impl Display for Paper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(max_x) = self.dots.iter().map(|dot| dot.x).max() else {
            return Ok(());
        };
        let max_y = self.dots.iter().map(|dot| dot.y).max().unwrap_or(0);
        for y in 0..=max_y {
            if y > 0 {
                writeln!(f)?;
            }

            for x in 0..=max_x {
                let mark = if self.dots.contains(&Dot { x, y }) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", mark)?;
            }
        }

        Ok(())
    }
}

pub fn read_origami<P: AsRef<Path>>(path: P) -> Result<(Paper, Vec<Fold>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut dots = HashSet::new();
    let mut folds = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(fold) = Fold::try_from_line(text) {
            folds.push(fold);
        } else if text.contains(',') {
            dots.insert(Dot::try_from(text)?);
        } else {
            return Err(Error::InvalidLineText(text.to_string()).into());
        }
    }

    Ok((Paper { dots }, folds))
}

fn parse_coordinate(text: &str) -> Result<i64, Error> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidCoordinateText(text.to_string()))
}
