use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const SPAWN_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidTimerText(String),
    TimerOutOfRange(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTimerText(s) => write!(f, "Invalid text({}) for spawn timer.", s),
            Error::TimerOutOfRange(timer) => write!(
                f,
                "Given spawn timer({}) is out of range, expect at most {}.",
                timer, SPAWN_TIMER
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    pub day_n: Option<usize>,
}

pub fn count_after_days_naive(timers: &[u8], day_n: usize) -> usize {
    let mut fishes = timers.to_vec();
    for _ in 0..day_n {
        let mut spawn_n = 0;
        for timer in fishes.iter_mut() {
            if *timer == 0 {
                *timer = RESET_TIMER as u8;
                spawn_n += 1;
            } else {
                *timer -= 1;
            }
        }
        fishes.extend(std::iter::repeat(SPAWN_TIMER as u8).take(spawn_n));
    }

    fishes.len()
}

pub fn count_after_days(timers: &[u8], day_n: usize) -> u64 {
    let mut timer_counts = [0u64; SPAWN_TIMER + 1];
    for timer in timers {
        timer_counts[*timer as usize] += 1;
    }

    for _ in 0..day_n {
        let spawning_n = timer_counts[0];
        timer_counts.rotate_left(1);
        timer_counts[RESET_TIMER] += spawning_n;
    }

    timer_counts.iter().sum()
}

pub fn read_timers<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut timers = Vec::new();
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
            let timer = text
                .trim()
                .parse::<u8>()
                .map_err(|_| Error::InvalidTimerText(text.to_string()))?;
            if timer as usize > SPAWN_TIMER {
                return Err(Error::TimerOutOfRange(timer).into());
            }

            timers.push(timer);
        }
    }

    Ok(timers)
}
