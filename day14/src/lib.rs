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

pub type InsertionRules = HashMap<(char, char), char>;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NoTemplateLine,
    InvalidRuleText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoTemplateLine => {
                write!(f, "Expect a polymer template line before insertion rules.")
            }
            Error::InvalidRuleText(s) => write!(
                f,
                "Invalid text({}) for insertion rule, expect a pair, an arrow and one element.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    pub step_n: Option<usize>,
}

#[derive(Debug)]
pub struct Polymer {
    pair_counts: HashMap<(char, char), u64>,
    element_counts: HashMap<char, u64>,
}

impl Polymer {
    pub fn from_template(template: &str) -> Self {
        let elements = template.chars().collect::<Vec<_>>();
        let mut pair_counts = HashMap::new();
        let mut element_counts = HashMap::new();
        for element in &elements {
            *element_counts.entry(*element).or_insert(0) += 1;
        }
        for pair in elements.windows(2) {
            *pair_counts.entry((pair[0], pair[1])).or_insert(0) += 1;
        }

        Self {
            pair_counts,
            element_counts,
        }
    }

    pub fn apply_steps(&mut self, rules: &InsertionRules, step_n: usize) {
        for _ in 0..step_n {
            let mut next_pair_counts = HashMap::new();
            for (pair, count) in &self.pair_counts {
                if let Some(insert) = rules.get(pair) {
                    *next_pair_counts.entry((pair.0, *insert)).or_insert(0) += count;
                    *next_pair_counts.entry((*insert, pair.1)).or_insert(0) += count;
                    *self.element_counts.entry(*insert).or_insert(0) += count;
                } else {
                    *next_pair_counts.entry(*pair).or_insert(0) += count;
                }
            }
            self.pair_counts = next_pair_counts;
        }
    }

    pub fn score(&self) -> u64 {
        let max_count = self.element_counts.values().max().copied().unwrap_or(0);
        let min_count = self.element_counts.values().min().copied().unwrap_or(0);

        max_count - min_count
    }
}

pub fn read_recipe<P: AsRef<Path>>(path: P) -> Result<(Polymer, InsertionRules)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut template_op = None;
    let mut rules = InsertionRules::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if text.contains("->") {
            let (pair, insert) = parse_rule(text)?;
            rules.insert(pair, insert);
        } else {
            template_op.get_or_insert(text.to_string());
        }
    }

    let template = template_op.ok_or(Error::NoTemplateLine)?;

    Ok((Polymer::from_template(&template), rules))
}

fn parse_rule(text: &str) -> Result<((char, char), char), Error> {
    let invalid = || Error::InvalidRuleText(text.to_string());
    let arrow_ind = text.find("->").ok_or_else(invalid)?;
    let pair_chars = text[..arrow_ind].trim().chars().collect::<Vec<_>>();
    let insert_chars = text[(arrow_ind + 2)..].trim().chars().collect::<Vec<_>>();
    if pair_chars.len() != 2 || insert_chars.len() != 1 {
        return Err(invalid());
    }

    Ok(((pair_chars[0], pair_chars[1]), insert_chars[0]))
}
