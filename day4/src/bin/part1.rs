use anyhow::{Context, Result};
use clap::Parser;
use day4::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let game = day4::read_game(&args.input_path).with_context(|| {
        format!(
            "Failed to read bingo game from given file({}).",
            args.input_path.display()
        )
    })?;
    let win_scores = game.play();
    if let Some(first_score) = win_scores.first() {
        println!("The score of the first winning board is {}.", first_score);
    } else {
        eprintln!("No board ever wins with given draw numbers.");
    }

    Ok(())
}
