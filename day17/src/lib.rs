use std::{
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
    NoTargetAreaLine,
    InvalidTargetAreaText(String),
    TargetNotAhead(i64),
    TargetNotBelow(i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoTargetAreaLine => write!(f, "Expect a target area line in input."),
            Error::InvalidTargetAreaText(s) => {
                write!(f, "Invalid text({}) for target area.", s)
            }
            Error::TargetNotAhead(x_min) => write!(
                f,
                "Expect the target area ahead of the probe, given left edge at {}.",
                x_min
            ),
            Error::TargetNotBelow(y_max) => write!(
                f,
                "Expect the target area below the probe, given top edge at {}.",
                y_max
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct TargetArea {
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
}

impl TryFrom<&str> for TargetArea {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)").unwrap()
        });

        let caps = PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidTargetAreaText(value.to_string()))?;
        let area = TargetArea {
            x_min: caps[1].parse::<i64>().unwrap(),
            x_max: caps[2].parse::<i64>().unwrap(),
            y_min: caps[3].parse::<i64>().unwrap(),
            y_max: caps[4].parse::<i64>().unwrap(),
        };
        if area.x_min <= 0 {
            return Err(Error::TargetNotAhead(area.x_min));
        }

        if area.y_max >= 0 {
            return Err(Error::TargetNotBelow(area.y_max));
        }

        Ok(area)
    }
}

impl TargetArea {
    pub fn contains(&self, x_pos: i64, y_pos: i64) -> bool {
        (self.x_min..=self.x_max).contains(&x_pos) && (self.y_min..=self.y_max).contains(&y_pos)
    }

    pub fn simulate(&self, x_vel: i64, y_vel: i64) -> Option<i64> {
        let (mut x_pos, mut y_pos) = (0, 0);
        let (mut x_vel, mut y_vel) = (x_vel, y_vel);
        let mut max_height = 0;
        loop {
            x_pos += x_vel;
            y_pos += y_vel;
            max_height = max_height.max(y_pos);
            if self.contains(x_pos, y_pos) {
                return Some(max_height);
            }

            if x_pos > self.x_max || y_pos < self.y_min {
                return None;
            }

            x_vel -= x_vel.signum();
            y_vel -= 1;
        }
    }

    pub fn hitting_shots(&self) -> Vec<((i64, i64), i64)> {
        let mut shots = Vec::new();
        for x_vel in 1..=self.x_max {
            for y_vel in self.y_min..=-self.y_min {
                if let Some(max_height) = self.simulate(x_vel, y_vel) {
                    shots.push(((x_vel, y_vel), max_height));
                }
            }
        }

        shots
    }
}

pub fn read_target_area<P: AsRef<Path>>(path: P) -> Result<TargetArea> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
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

        return Ok(TargetArea::try_from(line.trim())?);
    }

    Err(Error::NoTargetAreaLine.into())
}
