use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForRisk(char),
    EmptyRiskMap,
    ZeroScale,
    EndUnreachable(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForRisk(c) => {
                write!(f, "Invalid character({}) for risk level, expect a digit.", c)
            }
            Error::EmptyRiskMap => write!(f, "Given risk map is empty, expect at least one row."),
            Error::ZeroScale => write!(f, "Given scale is 0, expect a positive scale."),
            Error::EndUnreachable(end_pos) => write!(
                f,
                "No path from the start position reaches the end position({}).",
                end_pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    pub scale: Option<usize>,
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

#[derive(Debug, Clone)]
struct SearchState {
    pos: Position,
    total_risk: usize,
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total_risk.cmp(&other.total_risk)
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.total_risk == other.total_risk
    }
}

impl Eq for SearchState {}

impl SearchState {
    pub fn new(pos: Position, total_risk: usize) -> Self {
        Self { pos, total_risk }
    }
}

#[derive(Debug)]
pub struct RiskMap {
    risks: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl RiskMap {
    pub fn is_empty(&self) -> bool {
        self.row_n == 0 || self.col_n == 0
    }

    pub fn entry_risk(&self, pos: &Position, scale: usize) -> Option<usize> {
        if pos.r >= self.row_n * scale || pos.c >= self.col_n * scale {
            return None;
        }

        let base = self.risks[(pos.r % self.row_n) * self.col_n + pos.c % self.col_n] as usize;
        let bump = pos.r / self.row_n + pos.c / self.col_n;
        // (v - 1) % 9 + 1 with the subtraction folded into the modulus, so a
        // stored 0 wraps to 9 instead of underflowing.
        Some((base + bump + 8) % 9 + 1)
    }

    pub fn min_total_risk(&self, scale: usize) -> Result<usize, Error> {
        if scale == 0 {
            return Err(Error::ZeroScale);
        }

        if self.is_empty() {
            return Err(Error::EmptyRiskMap);
        }

        let start_pos = Position::new(0, 0);
        let end_pos = Position::new(self.row_n * scale - 1, self.col_n * scale - 1);
        let mut min_risks = HashMap::from([(start_pos.clone(), 0)]);
        let mut frontier = BinaryHeap::from([Reverse(SearchState::new(start_pos, 0))]);
        while let Some(Reverse(cur_state)) = frontier.pop() {
            if min_risks
                .get(&cur_state.pos)
                .is_some_and(|min_risk| cur_state.total_risk > *min_risk)
            {
                // Superseded by a cheaper path pushed later.
                continue;
            }

            if cur_state.pos == end_pos {
                return Ok(cur_state.total_risk);
            }

            for dir in Direction::all_dirs() {
                let Some(next_pos) = cur_state.pos.neighbor(*dir) else {
                    continue;
                };
                let Some(enter_risk) = self.entry_risk(&next_pos, scale) else {
                    continue;
                };
                let next_risk = cur_state.total_risk + enter_risk;
                if min_risks
                    .get(&next_pos)
                    .map(|min_risk| next_risk < *min_risk)
                    .unwrap_or(true)
                {
                    min_risks.insert(next_pos.clone(), next_risk);
                    frontier.push(Reverse(SearchState::new(next_pos, next_risk)));
                }
            }
        }

        Err(Error::EndUnreachable(end_pos))
    }
}

#[derive(Debug)]
pub struct RiskMapBuilder {
    risks: Vec<u8>,
    row_n: usize,
    col_n: Option<usize>,
}

impl RiskMapBuilder {
    pub fn new() -> Self {
        Self {
            risks: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for c in text.chars() {
            let risk = c.to_digit(10).ok_or(Error::InvalidCharForRisk(c))?;
            self.risks.push(risk as u8);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> RiskMap {
        RiskMap {
            risks: self.risks,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

impl Default for RiskMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_risk_map<P: AsRef<Path>>(path: P) -> Result<RiskMap> {
    let mut builder = RiskMapBuilder::new();
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(ioe) if ioe.kind() == io::ErrorKind::NotFound => {
            eprintln!(
                "No such file({}) exists, continuing with an empty risk map.",
                path.as_ref().display()
            );
            return Ok(builder.build());
        }
        Err(ioe) => {
            return Err(ioe).with_context(|| {
                format!("Failed to open given file({}).", path.as_ref().display())
            })
        }
    };
    let reader = BufReader::new(file);
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build())
}
