use anyhow::{Context, Result};
use clap::Parser;
use day5::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let segments = day5::read_segments(&args.input_path).with_context(|| {
        format!(
            "Failed to read vent segments from given file({}).",
            args.input_path.display()
        )
    })?;
    let overlap_n = day5::count_overlaps(&segments, true);
    println!(
        "Considering diagonal vents as well, {} point(s) are covered by at least two segments.",
        overlap_n
    );

    Ok(())
}
