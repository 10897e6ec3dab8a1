use anyhow::{Context, Result};
use clap::Parser;
use day13::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (mut paper, folds) = day13::read_origami(&args.input_path).with_context(|| {
        format!(
            "Failed to read dots and fold instructions from given file({}).",
            args.input_path.display()
        )
    })?;
    if let Some(first_fold) = folds.first() {
        paper.fold(*first_fold);
        println!(
            "After the first fold {} dot(s) are visible on the paper.",
            paper.dot_n()
        );
    } else {
        eprintln!("No fold instruction in given file.");
    }

    Ok(())
}
