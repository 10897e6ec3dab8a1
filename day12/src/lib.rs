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

const START_NAME: &str = "start";
const END_NAME: &str = "end";

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NoDashInEdgeText(String),
    NoStartCave,
    NoEndCave,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoDashInEdgeText(s) => write!(
                f,
                "Expect a dash between the two cave names in text({}).",
                s
            ),
            Error::NoStartCave => write!(f, "No start cave in given cave system."),
            Error::NoEndCave => write!(f, "No end cave in given cave system."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug)]
pub struct CaveSystem {
    adjacency: Vec<Vec<usize>>,
    small: Vec<bool>,
    start_ind: usize,
    end_ind: usize,
}

impl CaveSystem {
    pub fn count_paths(&self, allow_one_small_twice: bool) -> usize {
        let mut visit_counts = vec![0usize; self.adjacency.len()];
        self.search(self.start_ind, allow_one_small_twice, &mut visit_counts)
    }

    fn search(
        &self,
        cur_ind: usize,
        small_twice_left: bool,
        visit_counts: &mut Vec<usize>,
    ) -> usize {
        if cur_ind == self.end_ind {
            return 1;
        }

        visit_counts[cur_ind] += 1;
        let mut path_n = 0;
        for next_ind in &self.adjacency[cur_ind] {
            if *next_ind == self.start_ind {
                continue;
            }

            if self.small[*next_ind] && visit_counts[*next_ind] > 0 {
                if small_twice_left {
                    path_n += self.search(*next_ind, false, visit_counts);
                }

                continue;
            }

            path_n += self.search(*next_ind, small_twice_left, visit_counts);
        }
        visit_counts[cur_ind] -= 1;

        path_n
    }
}

#[derive(Debug)]
pub struct CaveSystemBuilder {
    cave_inds: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    small: Vec<bool>,
}

impl CaveSystemBuilder {
    pub fn new() -> Self {
        Self {
            cave_inds: HashMap::new(),
            adjacency: Vec::new(),
            small: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, text: &str) -> Result<(), Error> {
        let dash_ind = text
            .find('-')
            .ok_or_else(|| Error::NoDashInEdgeText(text.to_string()))?;
        let cave0_ind = self.intern_cave(text[..dash_ind].trim());
        let cave1_ind = self.intern_cave(text[(dash_ind + 1)..].trim());
        self.adjacency[cave0_ind].push(cave1_ind);
        self.adjacency[cave1_ind].push(cave0_ind);

        Ok(())
    }

    pub fn build(self) -> Result<CaveSystem, Error> {
        let start_ind = *self.cave_inds.get(START_NAME).ok_or(Error::NoStartCave)?;
        let end_ind = *self.cave_inds.get(END_NAME).ok_or(Error::NoEndCave)?;

        Ok(CaveSystem {
            adjacency: self.adjacency,
            small: self.small,
            start_ind,
            end_ind,
        })
    }

    fn intern_cave(&mut self, name: &str) -> usize {
        if let Some(ind) = self.cave_inds.get(name) {
            return *ind;
        }

        let ind = self.adjacency.len();
        self.cave_inds.insert(name.to_string(), ind);
        self.adjacency.push(Vec::new());
        self.small
            .push(name.chars().all(|c| c.is_ascii_lowercase()));

        ind
    }
}

impl Default for CaveSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_cave_system<P: AsRef<Path>>(path: P) -> Result<CaveSystem> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = CaveSystemBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_edge(line.as_str())?;
    }

    Ok(builder.build()?)
}
