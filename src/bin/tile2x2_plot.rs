use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use tile2x2_map_plot::{
    cli::{write_outputs, CommonArgs},
    persist::Tables,
    render::render_atlas,
};

/// Lay out every tile2x2 entry in order, for checking the raw block data.
#[derive(Parser, Debug)]
struct Args {
    tilegraphic: PathBuf,
    palette: PathBuf,
    tile2x2: PathBuf,
    output: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.common.render_config()?;

    let tables = Tables::load(&args.tilegraphic, &args.palette, &args.tile2x2)?;
    let render = render_atlas(tables.sources(), config.background, config.atlas_blocks_per_row);
    if write_outputs(render, &args.output, &args.common, &config)? {
        info!("Saved tile test image to {}", args.output.display());
    }
    Ok(())
}
