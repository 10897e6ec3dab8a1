use anyhow::{Context, Result};
use clap::Parser;
use day12::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let cave_system = day12::read_cave_system(&args.input_path).with_context(|| {
        format!(
            "Failed to read cave system from given file({}).",
            args.input_path.display()
        )
    })?;
    let path_n = cave_system.count_paths(false);
    println!(
        "There are {} path(s) through the cave system visiting small caves at most once.",
        path_n
    );

    Ok(())
}
