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
    for fold in folds {
        paper.fold(fold);
    }
    println!("After all folds the paper reads:");
    println!("{}", paper);

    Ok(())
}
