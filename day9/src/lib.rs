use std::{
    collections::{HashSet, LinkedList},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const WALL_HEIGHT: u8 = 9;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForHeight(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForHeight(c) => {
                write!(f, "Invalid character({}) for height, expect a digit.", c)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct HeightMap {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl HeightMap {
    pub fn total_risk_level(&self) -> usize {
        self.low_positions()
            .iter()
            .map(|pos| self.height(pos).unwrap_or(0) as usize + 1)
            .sum()
    }

    pub fn low_positions(&self) -> Vec<Position> {
        let mut low_positions = Vec::new();
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                let pos = Position::new(r, c);
                let Some(height) = self.height(&pos) else {
                    continue;
                };
                if Direction::all_dirs()
                    .iter()
                    .flat_map(|dir| pos.neighbor(*dir))
                    .flat_map(|neighbor| self.height(&neighbor))
                    .all(|neighbor_height| height < neighbor_height)
                {
                    low_positions.push(pos);
                }
            }
        }

        low_positions
    }

    pub fn basin_sizes(&self) -> Vec<usize> {
        self.low_positions()
            .iter()
            .map(|low_pos| self.basin_size(low_pos))
            .collect()
    }

    fn basin_size(&self, low_pos: &Position) -> usize {
        let mut search_positions = LinkedList::from([low_pos.clone()]);
        let mut searched_positions = HashSet::from([low_pos.clone()]);
        let mut size = 0;
        while let Some(cur_pos) = search_positions.pop_front() {
            size += 1;
            for next_pos in Direction::all_dirs()
                .iter()
                .flat_map(|dir| cur_pos.neighbor(*dir))
                .filter(|pos| {
                    self.height(pos)
                        .map(|height| height < WALL_HEIGHT)
                        .unwrap_or(false)
                })
            {
                if searched_positions.insert(next_pos.clone()) {
                    search_positions.push_back(next_pos);
                }
            }
        }

        size
    }

    fn height(&self, pos: &Position) -> Option<u8> {
        if pos.r < self.row_n && pos.c < self.col_n {
            self.heights.get(pos.r * self.col_n + pos.c).copied()
        } else {
            None
        }
    }
}

pub fn read_height_map<P: AsRef<Path>>(path: P) -> Result<HeightMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut heights = Vec::new();
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
            let height = c.to_digit(10).ok_or(Error::InvalidCharForHeight(c))?;
            heights.push(height as u8);
        }
        row_n += 1;
    }

    Ok(HeightMap {
        heights,
        row_n,
        col_n: col_n_op.unwrap_or(0),
    })
}
