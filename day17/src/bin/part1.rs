use anyhow::{Context, Result};
use clap::Parser;
use day17::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let target_area = day17::read_target_area(&args.input_path).with_context(|| {
        format!(
            "Failed to read target area from given file({}).",
            args.input_path.display()
        )
    })?;
    let shots = target_area.hitting_shots();
    if let Some(best_height) = shots.iter().map(|(_, max_height)| *max_height).max() {
        println!(
            "The highest apex of any shot that hits the target area is {}.",
            best_height
        );
    } else {
        eprintln!("No shot hits the target area.");
    }

    Ok(())
}
