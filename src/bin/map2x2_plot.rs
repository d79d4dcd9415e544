use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use tile2x2_map_plot::{
    cli::{write_outputs, CommonArgs},
    persist::{load_flat_map, Tables},
    render::render_flat,
};

/// Render a flat tile2x2 map, first row at the bottom.
#[derive(Parser, Debug)]
struct Args {
    tilegraphic: PathBuf,
    palette: PathBuf,
    tile2x2: PathBuf,
    map: PathBuf,
    output: PathBuf,

    /// Label each 64-cell block with its index and map offset
    #[arg(long)]
    debug_blocks: bool,

    #[command(flatten)]
    common: CommonArgs,
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.common.render_config()?;

    let tables = Tables::load(&args.tilegraphic, &args.palette, &args.tile2x2)?;
    let map = load_flat_map(&args.map)?;
    let render = render_flat(tables.sources(), &map, config.background, args.debug_blocks);
    if write_outputs(render, &args.output, &args.common, &config)? {
        info!("Map image saved to {}", args.output.display());
    }
    Ok(())
}
