use anyhow::{Context, Result};
use clap::Parser;
use day14::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let (mut polymer, rules) = day14::read_recipe(&args.input_path).with_context(|| {
        format!(
            "Failed to read polymer recipe from given file({}).",
            args.input_path.display()
        )
    })?;
    let step_n = args.step_n.unwrap_or(40);
    polymer.apply_steps(&rules, step_n);
    println!(
        "After {} step(s) the most common element count minus the least common one is {}.",
        step_n,
        polymer.score()
    );

    Ok(())
}
