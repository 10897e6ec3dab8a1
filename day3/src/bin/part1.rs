use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let report = day3::read_report(&args.input_path).with_context(|| {
        format!(
            "Failed to read diagnostic report from given file({}).",
            args.input_path.display()
        )
    })?;
    let power = report
        .power_consumption()
        .context("Failed to compute the power consumption of given report.")?;
    println!("The power consumption of the submarine is {}.", power);

    Ok(())
}
