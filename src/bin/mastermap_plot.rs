use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use tile2x2_map_plot::{
    cli::{write_outputs, CommonArgs},
    persist::{load_flat_map, load_master_map, Tables},
    render::render_master,
};

/// Render a master map: two 256x256 super-tiles per row, first row at the bottom.
#[derive(Parser, Debug)]
struct Args {
    tilegraphic: PathBuf,
    palette: PathBuf,
    tile2x2: PathBuf,
    map: PathBuf,
    master_map: PathBuf,
    output: PathBuf,

    /// Don't label super-tiles with their tile2x2 offset and chunk
    #[arg(long)]
    no_labels: bool,

    #[command(flatten)]
    common: CommonArgs,
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.common.render_config()?;

    let tables = Tables::load(&args.tilegraphic, &args.palette, &args.tile2x2)?;
    let map = load_flat_map(&args.map)?;
    let master = load_master_map(&args.master_map)?;
    let render = render_master(
        tables.sources(),
        &map,
        &master,
        config.background,
        !args.no_labels,
    );
    if write_outputs(render, &args.output, &args.common, &config)? {
        info!("Map image saved to {}", args.output.display());
    }
    Ok(())
}
