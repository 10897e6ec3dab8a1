use std::{
    collections::HashMap,
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
    NoArrowInSegmentText(String),
    NoCommaInPositionText(String),
    InvalidCoordinateText(String),
    SkewSegment(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoArrowInSegmentText(s) => write!(
                f,
                "Expect an arrow between the two endpoints in text({}).",
                s
            ),
            Error::NoCommaInPositionText(s) => write!(
                f,
                "Expect a comma to separate coordinates of position in text({}).",
                s
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of position.", s)
            }
            Error::SkewSegment(s) => write!(
                f,
                "Given segment({}) is neither axis aligned nor diagonal at 45 degrees.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i64,
    y: i64,
}

impl TryFrom<&str> for Position {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let comma_ind = value
            .find(',')
            .ok_or_else(|| Error::NoCommaInPositionText(value.to_string()))?;
        let x = parse_coordinate(&value[..comma_ind])?;
        let y = parse_coordinate(&value[(comma_ind + 1)..])?;

        Ok(Position { x, y })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    from: Position,
    to: Position,
}

impl TryFrom<&str> for LineSegment {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let arrow_ind = value
            .find("->")
            .ok_or_else(|| Error::NoArrowInSegmentText(value.to_string()))?;
        let from = Position::try_from(value[..arrow_ind].trim())?;
        let to = Position::try_from(value[(arrow_ind + 2)..].trim())?;
        let segment = LineSegment { from, to };
        if !segment.is_axis_aligned() && !segment.is_diagonal() {
            return Err(Error::SkewSegment(value.to_string()));
        }

        Ok(segment)
    }
}

impl LineSegment {
    pub fn is_axis_aligned(&self) -> bool {
        self.from.x == self.to.x || self.from.y == self.to.y
    }

    pub fn is_diagonal(&self) -> bool {
        (self.to.x - self.from.x).abs() == (self.to.y - self.from.y).abs()
    }

    pub fn points(&self) -> Vec<Position> {
        let x_step = (self.to.x - self.from.x).signum();
        let y_step = (self.to.y - self.from.y).signum();
        let step_n = (self.to.x - self.from.x)
            .abs()
            .max((self.to.y - self.from.y).abs());
        (0..=step_n)
            .map(|step| Position {
                x: self.from.x + x_step * step,
                y: self.from.y + y_step * step,
            })
            .collect()
    }
}

pub fn count_overlaps(segments: &[LineSegment], include_diagonal: bool) -> usize {
    let mut cover_counts = HashMap::new();
    for segment in segments {
        if !include_diagonal && !segment.is_axis_aligned() {
            continue;
        }

        for point in segment.points() {
            *cover_counts.entry(point).or_insert(0usize) += 1;
        }
    }

    cover_counts.values().filter(|count| **count >= 2).count()
}

pub fn read_segments<P: AsRef<Path>>(path: P) -> Result<Vec<LineSegment>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut segments = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        segments.push(LineSegment::try_from(line.as_str())?);
    }

    Ok(segments)
}

fn parse_coordinate(text: &str) -> Result<i64, Error> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidCoordinateText(text.to_string()))
}
