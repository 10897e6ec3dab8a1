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
    NoSpaceInCommandText(String),
    InvalidDirection(String),
    InvalidAmountText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoSpaceInCommandText(s) => write!(
                f,
                "Expect a space between direction and amount in text({}).",
                s
            ),
            Error::InvalidDirection(s) => write!(f, "Invalid direction({}) for command.", s),
            Error::InvalidAmountText(s) => write!(f, "Invalid text({}) for command amount.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let space_ind = value
            .find(' ')
            .ok_or_else(|| Error::NoSpaceInCommandText(value.to_string()))?;
        let amount_text = value[(space_ind + 1)..].trim();
        let amount = amount_text
            .parse::<i64>()
            .map_err(|_| Error::InvalidAmountText(amount_text.to_string()))?;
        match &value[..space_ind] {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

pub fn final_position(commands: &[Command]) -> (i64, i64) {
    let mut horizontal = 0;
    let mut depth = 0;
    for command in commands {
        match command {
            Command::Forward(amount) => horizontal += amount,
            Command::Down(amount) => depth += amount,
            Command::Up(amount) => depth -= amount,
        }
    }

    (horizontal, depth)
}

pub fn final_position_with_aim(commands: &[Command]) -> (i64, i64) {
    let mut horizontal = 0;
    let mut depth = 0;
    let mut aim = 0;
    for command in commands {
        match command {
            Command::Forward(amount) => {
                horizontal += amount;
                depth += aim * amount;
            }
            Command::Down(amount) => aim += amount,
            Command::Up(amount) => aim -= amount,
        }
    }

    (horizontal, depth)
}

pub fn read_commands<P: AsRef<Path>>(path: P) -> Result<Vec<Command>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut commands = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        commands.push(Command::try_from(line.as_str())?);
    }

    Ok(commands)
}
