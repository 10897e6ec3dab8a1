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
    let scale = args.scale.unwrap_or(1);
    let min_risk = risk_map.min_total_risk(scale).with_context(|| {
        format!(
            "Failed to compute the minimum total risk of given map at scale {}.",
            scale
        )
    })?;
    println!(
        "The minimum total risk on the way from the top left to the bottom right of given map is {}.",
        min_risk
    );

    Ok(())
}
