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
    println!(
        "There are {} distinct initial velocities that hit the target area.",
        shots.len()
    );

    Ok(())
}
