use anyhow::{Context, Result};
use clap::Parser;
use day7::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let positions = day7::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read crab positions from given file({}).",
            args.input_path.display()
        )
    })?;
    if let Some(min_fuel) = day7::min_triangular_fuel(&positions) {
        println!(
            "The crabs can align with a minimum of {} fuel at a growing burn rate.",
            min_fuel
        );
    } else {
        eprintln!("No crab positions in given file, nothing to align.");
    }

    Ok(())
}
