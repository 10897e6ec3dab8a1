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
    let mut total_score = 0;
    for line in &lines {
        if let LineCheck::Corrupted(c) = day10::check_line(line)
            .with_context(|| format!("Failed to check chunk line({}).", line))?
        {
            total_score += day10::corruption_score(c);
        }
    }
    println!("The total syntax error score is {}.", total_score);

    Ok(())
}
