use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const BOARD_SIDE: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NoDrawLine,
    InvalidNumberText(String),
    WrongBoardRowLen(usize, usize),
    IncompleteBoard(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoDrawLine => write!(f, "Expect a line of draw numbers at the top of input."),
            Error::InvalidNumberText(s) => write!(f, "Invalid text({}) for bingo number.", s),
            Error::WrongBoardRowLen(expect_n, this_n) => write!(
                f,
                "Expect {} number(s) in each board row, given {}.",
                expect_n, this_n
            ),
            Error::IncompleteBoard(expect_row_n, this_row_n) => write!(
                f,
                "Expect {} row(s) in each board, given {} at the end of input.",
                expect_row_n, this_row_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct BingoBoard {
    numbers: Vec<u8>,
    marks: Vec<bool>,
}

impl BingoBoard {
    fn from_rows(rows: &[Vec<u8>]) -> Self {
        debug_assert!(rows.len() == BOARD_SIDE && rows.iter().all(|row| row.len() == BOARD_SIDE));

        Self {
            numbers: rows.concat(),
            marks: vec![false; BOARD_SIDE * BOARD_SIDE],
        }
    }

    pub fn cross_out(&mut self, value: u8) {
        for (ind, number) in self.numbers.iter().enumerate() {
            if *number == value {
                self.marks[ind] = true;
            }
        }
    }

    pub fn is_bingo(&self) -> bool {
        (0..BOARD_SIDE).any(|r| (0..BOARD_SIDE).all(|c| self.marks[r * BOARD_SIDE + c]))
            || (0..BOARD_SIDE).any(|c| (0..BOARD_SIDE).all(|r| self.marks[r * BOARD_SIDE + c]))
    }

    pub fn unmarked_sum(&self) -> usize {
        self.numbers
            .iter()
            .zip(self.marks.iter())
            .filter(|(_, marked)| !**marked)
            .map(|(number, _)| *number as usize)
            .sum()
    }
}

#[derive(Debug)]
pub struct BingoGame {
    draws: Vec<u8>,
    boards: Vec<BingoBoard>,
}

impl BingoGame {
    pub fn play(mut self) -> Vec<usize> {
        let mut win_scores = Vec::new();
        let mut won = vec![false; self.boards.len()];
        for draw in &self.draws {
            for (ind, board) in self.boards.iter_mut().enumerate() {
                if won[ind] {
                    continue;
                }

                board.cross_out(*draw);
                if board.is_bingo() {
                    won[ind] = true;
                    win_scores.push(board.unmarked_sum() * *draw as usize);
                }
            }

            if win_scores.len() == self.boards.len() {
                break;
            }
        }

        win_scores
    }
}

pub fn read_game<P: AsRef<Path>>(path: P) -> Result<BingoGame> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        lines.push(line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    let draw_line = lines.first().ok_or(Error::NoDrawLine)?;
    let mut draws = Vec::new();
    for text in draw_line.split(',') {
        draws.push(parse_number(text)?);
    }

    let mut boards = Vec::new();
    let mut pending_rows: Vec<Vec<u8>> = Vec::new();
    for line in lines.iter().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(BOARD_SIDE);
        for text in line.split_whitespace() {
            row.push(parse_number(text)?);
        }
        if row.len() != BOARD_SIDE {
            return Err(Error::WrongBoardRowLen(BOARD_SIDE, row.len()).into());
        }

        pending_rows.push(row);
        if pending_rows.len() == BOARD_SIDE {
            boards.push(BingoBoard::from_rows(&pending_rows));
            pending_rows.clear();
        }
    }

    if !pending_rows.is_empty() {
        return Err(Error::IncompleteBoard(BOARD_SIDE, pending_rows.len()).into());
    }

    Ok(BingoGame { draws, boards })
}

fn parse_number(text: &str) -> Result<u8, Error> {
    text.trim()
        .parse::<u8>()
        .map_err(|_| Error::InvalidNumberText(text.to_string()))
}
