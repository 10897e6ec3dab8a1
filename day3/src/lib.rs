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
    InconsistentCodeLen(usize, usize),
    InvalidCharForBit(char),
    EmptyReport,
    NoRatingCandidate,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentCodeLen(expect_bit_n, this_bit_n) => write!(
                f,
                "Expect {} bit(s) in each code, given {}.",
                expect_bit_n, this_bit_n
            ),
            Error::InvalidCharForBit(c) => write!(f, "Invalid character({}) for bit.", c),
            Error::EmptyReport => write!(f, "Given diagnostic report is empty."),
            Error::NoRatingCandidate => {
                write!(f, "No code in given report survives the rating filter.")
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
pub struct DiagnosticReport {
    codes: Vec<Vec<bool>>,
    bit_n: usize,
}

impl DiagnosticReport {
    pub fn power_consumption(&self) -> Result<usize, Error> {
        if self.codes.is_empty() {
            return Err(Error::EmptyReport);
        }

        let all_codes = self.codes.iter().collect::<Vec<_>>();
        let mut gamma = 0;
        let mut epsilon = 0;
        for bit_ind in 0..self.bit_n {
            gamma <<= 1;
            epsilon <<= 1;
            if Self::one_is_majority(&all_codes, bit_ind) {
                gamma |= 1;
            } else {
                epsilon |= 1;
            }
        }

        Ok(gamma * epsilon)
    }

    pub fn life_support_rating(&self) -> Result<usize, Error> {
        if self.codes.is_empty() {
            return Err(Error::EmptyReport);
        }

        let o2_rating = self.filter_rating(true)?;
        let co2_rating = self.filter_rating(false)?;

        Ok(o2_rating * co2_rating)
    }

    fn filter_rating(&self, keep_majority: bool) -> Result<usize, Error> {
        let mut candidates = self.codes.iter().collect::<Vec<_>>();
        for bit_ind in 0..self.bit_n {
            if candidates.len() == 1 {
                break;
            }

            let keep_one = Self::one_is_majority(&candidates, bit_ind) == keep_majority;
            candidates.retain(|code| code[bit_ind] == keep_one);
        }

        candidates
            .first()
            .copied()
            .map(|code| Self::code_value(code))
            .ok_or(Error::NoRatingCandidate)
    }

    fn one_is_majority(codes: &[&Vec<bool>], bit_ind: usize) -> bool {
        let one_n = codes.iter().filter(|code| code[bit_ind]).count();
        one_n * 2 >= codes.len()
    }

    fn code_value(code: &[bool]) -> usize {
        code.iter().fold(0, |value, bit| (value << 1) | *bit as usize)
    }
}

pub fn read_report<P: AsRef<Path>>(path: P) -> Result<DiagnosticReport> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut codes = Vec::new();
    let mut bit_n_op = None;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let this_bit_n = line.chars().count();
        if *bit_n_op.get_or_insert(this_bit_n) != this_bit_n {
            return Err(Error::InconsistentCodeLen(bit_n_op.unwrap(), this_bit_n).into());
        }

        let mut code = Vec::with_capacity(this_bit_n);
        for c in line.chars() {
            code.push(match c {
                '0' => false,
                '1' => true,
                other => return Err(Error::InvalidCharForBit(other).into()),
            });
        }
        codes.push(code);
    }

    Ok(DiagnosticReport {
        codes,
        bit_n: bit_n_op.unwrap_or(0),
    })
}
