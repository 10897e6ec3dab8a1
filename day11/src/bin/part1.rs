use anyhow::{Context, Result};
use clap::Parser;
use day11::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut grid = day11::read_energy_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read energy grid from given file({}).",
            args.input_path.display()
        )
    })?;
    let flash_n = grid.count_flashes(100);
    println!("After 100 step(s) there have been {} flash(es).", flash_n);

    Ok(())
}
