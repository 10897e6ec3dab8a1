use anyhow::{Context, Result};
use clap::Parser;
use day9::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let height_map = day9::read_height_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read height map from given file({}).",
            args.input_path.display()
        )
    })?;
    let mut basin_sizes = height_map.basin_sizes();
    basin_sizes.sort_unstable_by(|size0, size1| size1.cmp(size0));
    if basin_sizes.len() >= 3 {
        println!(
            "The product of the sizes of the three largest basins is {}.",
            basin_sizes[..3].iter().product::<usize>()
        );
    } else {
        eprintln!(
            "Expect at least 3 basins in given height map, found {}.",
            basin_sizes.len()
        );
    }

    Ok(())
}
