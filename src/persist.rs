use std::{
    fs,
    io::BufWriter,
    path::Path,
};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Serializer;

use crate::{
    compositor::Sources,
    pixels::PixelBuffer,
    tables::{FlatMap, MasterMap, PaletteTable, Tile2x2Table, TileAtlas},
};

pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &data_bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let data_bytes = fs::read(path)?;
    let data: T = serde_json::from_slice(&data_bytes)?;
    Ok(data)
}

fn load_bytes(path: &Path) -> Result<Vec<u8>> {
    info!("Loading {}", path.display());
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

/// Tables shared by every renderer.
pub struct Tables {
    pub tiles: TileAtlas,
    pub palette: PaletteTable,
    pub blocks: Tile2x2Table,
}

impl Tables {
    pub fn load(tiles: &Path, palette: &Path, tile2x2: &Path) -> Result<Self> {
        let tables = Tables {
            tiles: TileAtlas::parse(&load_bytes(tiles)?),
            palette: PaletteTable::parse(&load_bytes(palette)?),
            blocks: Tile2x2Table::parse(&load_bytes(tile2x2)?),
        };
        info!(
            "{} tiles, {} colors, {} tile2x2 entries",
            tables.tiles.tile_count(),
            tables.palette.len(),
            tables.blocks.len()
        );
        Ok(tables)
    }

    pub fn sources(&self) -> Sources<'_> {
        Sources {
            tiles: &self.tiles,
            palette: &self.palette,
            blocks: &self.blocks,
        }
    }
}

pub fn load_flat_map(path: &Path) -> Result<FlatMap> {
    let map = FlatMap::parse(&load_bytes(path)?);
    info!("{} map cells ({} rows)", map.len(), map.rows());
    Ok(map)
}

pub fn load_master_map(path: &Path) -> Result<MasterMap> {
    let master = MasterMap::parse(&load_bytes(path)?);
    info!("{} master-map entries", master.entry_count());
    Ok(master)
}

pub fn save_png(path: &Path, canvas: &PixelBuffer) -> Result<()> {
    info!("Saving {}", path.display());
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.to_rgb_bytes())?;
    writer.finish()?;
    Ok(())
}
