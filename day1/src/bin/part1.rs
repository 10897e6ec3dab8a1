use anyhow::{Context, Result};
use clap::Parser;
use day1::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let depths = day1::read_depths(&args.input_path).with_context(|| {
        format!(
            "Failed to read depth report from given file({}).",
            args.input_path.display()
        )
    })?;
    let incr_n = day1::count_increases(&depths, 1)
        .context("Failed to count depth increases in given report.")?;
    println!(
        "The depth report contains {} measurement(s) larger than the previous one.",
        incr_n
    );

    Ok(())
}
