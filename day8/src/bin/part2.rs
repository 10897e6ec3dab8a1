use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let entries = day8::read_entries(&args.input_path).with_context(|| {
        format!(
            "Failed to read display entries from given file({}).",
            args.input_path.display()
        )
    })?;
    let mut output_sum = 0;
    for entry in &entries {
        output_sum += entry
            .decode_output()
            .context("Failed to decode the wiring of an entry.")?;
    }
    println!("The sum of all decoded output values is {}.", output_sum);

    Ok(())
}
