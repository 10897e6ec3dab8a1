use anyhow::{Context, Result};
use clap::Parser;
use day15::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let risk_map = day15::read_risk_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read risk map from given file({}).",
            args.input_path.display()
        )
    })?;
    let scale = args.scale.unwrap_or(5);
    let min_risk = risk_map.min_total_risk(scale).with_context(|| {
        format!(
            "Failed to compute the minimum total risk of given map at scale {}.",
            scale
        )
    })?;
    println!(
        "The minimum total risk on the way through given map replicated {} time(s) in each direction is {}.",
        scale, min_risk
    );

    Ok(())
}
