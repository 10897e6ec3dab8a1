use anyhow::{Context, Result};
use clap::Parser;
use day6::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let timers = day6::read_timers(&args.input_path).with_context(|| {
        format!(
            "Failed to read spawn timers from given file({}).",
            args.input_path.display()
        )
    })?;
    let day_n = args.day_n.unwrap_or(256);
    let fish_n = day6::count_after_days(&timers, day_n);
    println!("After {} day(s) there are {} lanternfish.", day_n, fish_n);

    Ok(())
}
