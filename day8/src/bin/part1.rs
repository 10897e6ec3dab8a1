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
    let unique_n = entries
        .iter()
        .map(|entry| entry.unique_len_output_n())
        .sum::<usize>();
    println!(
        "The digits 1, 4, 7 and 8 appear {} time(s) in the outputs.",
        unique_n
    );

    Ok(())
}
