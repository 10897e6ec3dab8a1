use anyhow::{Context, Result};
use clap::Parser;
use day11::CLIArgs;

const MAX_STEP_N: usize = 100000;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut grid = day11::read_energy_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read energy grid from given file({}).",
            args.input_path.display()
        )
    })?;
    if let Some(step) = grid.first_all_flash_step(MAX_STEP_N) {
        println!("The first step during which all octopuses flash is {}.", step);
    } else {
        eprintln!(
            "The octopuses never flash together within {} step(s).",
            MAX_STEP_N
        );
    }

    Ok(())
}
