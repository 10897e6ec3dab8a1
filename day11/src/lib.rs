use std::{
    collections::LinkedList,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const FLASH_LEVEL: u8 = 9;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForEnergy(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForEnergy(c) => {
                write!(f, "Invalid character({}) for energy level, expect a digit.", c)
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
pub struct EnergyGrid {
    levels: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl EnergyGrid {
    pub fn octopus_n(&self) -> usize {
        self.levels.len()
    }

    pub fn step(&mut self) -> usize {
        let mut flashed = vec![false; self.levels.len()];
        let mut pending_inds = LinkedList::new();
        for ind in 0..self.levels.len() {
            self.levels[ind] += 1;
            if self.levels[ind] > FLASH_LEVEL {
                flashed[ind] = true;
                pending_inds.push_back(ind);
            }
        }

        while let Some(cur_ind) = pending_inds.pop_front() {
            for next_ind in self.neighbor_inds(cur_ind) {
                if flashed[next_ind] {
                    continue;
                }

                self.levels[next_ind] += 1;
                if self.levels[next_ind] > FLASH_LEVEL {
                    flashed[next_ind] = true;
                    pending_inds.push_back(next_ind);
                }
            }
        }

        let mut flash_n = 0;
        for (ind, octopus_flashed) in flashed.iter().enumerate() {
            if *octopus_flashed {
                self.levels[ind] = 0;
                flash_n += 1;
            }
        }

        flash_n
    }

    pub fn count_flashes(&mut self, step_n: usize) -> usize {
        (0..step_n).map(|_| self.step()).sum()
    }

    pub fn first_all_flash_step(&mut self, max_step_n: usize) -> Option<usize> {
        (1..=max_step_n).find(|_| self.step() == self.octopus_n())
    }

    fn neighbor_inds(&self, ind: usize) -> Vec<usize> {
        let r = ind / self.col_n;
        let c = ind % self.col_n;
        let mut inds = Vec::new();
        for next_r in r.saturating_sub(1)..=(r + 1).min(self.row_n - 1) {
            for next_c in c.saturating_sub(1)..=(c + 1).min(self.col_n - 1) {
                if (next_r, next_c) != (r, c) {
                    inds.push(next_r * self.col_n + next_c);
                }
            }
        }

        inds
    }
}

pub fn read_energy_grid<P: AsRef<Path>>(path: P) -> Result<EnergyGrid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut levels = Vec::new();
    let mut row_n = 0;
    let mut col_n_op = None;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let this_col_n = line.chars().count();
        if *col_n_op.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(col_n_op.unwrap(), this_col_n).into());
        }

        for c in line.chars() {
            let level = c.to_digit(10).ok_or(Error::InvalidCharForEnergy(c))?;
            levels.push(level as u8);
        }
        row_n += 1;
    }

    Ok(EnergyGrid {
        levels,
        row_n,
        col_n: col_n_op.unwrap_or(0),
    })
}
