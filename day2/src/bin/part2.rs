use anyhow::{Context, Result};
use clap::Parser;
use day2::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let commands = day2::read_commands(&args.input_path).with_context(|| {
        format!(
            "Failed to read course commands from given file({}).",
            args.input_path.display()
        )
    })?;
    let (horizontal, depth) = day2::final_position_with_aim(&commands);
    println!(
        "With aim, the final horizontal position({}) multiplied by the final depth({}) is {}.",
        horizontal,
        depth,
        horizontal * depth
    );

    Ok(())
}
