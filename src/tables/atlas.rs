use crate::{
    common::{ColorIdx, BYTES_PER_TILE, TILE_SIZE},
    helpers::unpack_nibbles,
    units::TileIndex,
};

/// Raw 4bpp tile graphics, 128 bytes per 16x16 tile.
#[derive(Clone, Debug, Default)]
pub struct TileAtlas {
    data: Vec<u8>,
}

/// Borrowed view of a single tile's packed pixels.
#[derive(Copy, Clone, Debug)]
pub struct Tile<'a> {
    bytes: &'a [u8],
}

impl TileAtlas {
    pub fn parse(data: &[u8]) -> Self {
        let tile_cnt = data.len() / BYTES_PER_TILE;
        TileAtlas {
            data: data[..tile_cnt * BYTES_PER_TILE].to_vec(),
        }
    }

    pub fn tile_count(&self) -> usize {
        self.data.len() / BYTES_PER_TILE
    }

    pub fn tile(&self, idx: TileIndex) -> Option<Tile<'_>> {
        let offset = idx.0 as usize * BYTES_PER_TILE;
        self.data
            .get(offset..offset + BYTES_PER_TILE)
            .map(|bytes| Tile { bytes })
    }
}

impl<'a> Tile<'a> {
    /// Color indices of one row, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = ColorIdx> + 'a {
        let row_bytes = TILE_SIZE as usize / 2;
        let bytes: &'a [u8] = self.bytes;
        bytes[y * row_bytes..(y + 1) * row_bytes]
            .iter()
            .flat_map(|&b| {
                let (left, right) = unpack_nibbles(b);
                [left, right]
            })
    }
}
