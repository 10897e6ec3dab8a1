use anyhow::{Context, Result};
use clap::Parser;
use day10::{CLIArgs, LineCheck};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let lines = day10::read_lines(&args.input_path).with_context(|| {
        format!(
            "Failed to read chunk lines from given file({}).",
            args.input_path.display()
        )
    })?;
    let mut scores = Vec::new();
    for line in &lines {
        if let LineCheck::Incomplete(open_stack) = day10::check_line(line)
            .with_context(|| format!("Failed to check chunk line({}).", line))?
        {
            scores.push(day10::completion_score(&open_stack));
        }
    }

    scores.sort_unstable();
    if let Some(middle_score) = scores.get(scores.len() / 2) {
        println!("The middle completion score is {}.", middle_score);
    } else {
        eprintln!("No incomplete line in given file, no completion score.");
    }

    Ok(())
}
