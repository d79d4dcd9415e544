// The master map refers into the tile2x2 table by *byte offset*, while the flat
// map refers into it by *entry index*. Mixing the two up silently produces a
// plausible-looking but wrong image, so each unit gets its own wrapper type and
// the only conversions between them are the ones below.
use std::{fmt::Display, ops::Add};

use serde::Serialize;

use crate::common::SUPERTILE_CELLS;

pub const TILE2X2_ENTRY_SIZE: u32 = 5;
pub const CHUNK_CELLS: usize = SUPERTILE_CELLS * SUPERTILE_CELLS;

/// Byte offset into the raw tile2x2 table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Tile2x2ByteOffset(pub u32);

/// Index of a five-byte entry in the tile2x2 table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tile2x2Index(pub usize);

/// Index of a 64-cell window of the flat map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ChunkIndex(pub u8);

/// Byte offset into the flat map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MapOffset(pub usize);

/// 11-bit index of a tile in the atlas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TileIndex(pub u16);

/// 4-bit palette bank selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PaletteBank(pub u8);

impl Tile2x2ByteOffset {
    pub fn from_hi_byte(hi: u8) -> Self {
        Self((hi as u32) << 8)
    }
}

impl From<Tile2x2ByteOffset> for Tile2x2Index {
    // Offsets that are not a multiple of the entry size are truncated, same as
    // the assets were authored against.
    fn from(offset: Tile2x2ByteOffset) -> Self {
        Tile2x2Index((offset.0 / TILE2X2_ENTRY_SIZE) as usize)
    }
}

impl From<ChunkIndex> for MapOffset {
    fn from(chunk: ChunkIndex) -> Self {
        MapOffset(chunk.0 as usize * CHUNK_CELLS)
    }
}

impl Add<u8> for Tile2x2Index {
    type Output = Tile2x2Index;

    fn add(self, cell: u8) -> Self {
        Tile2x2Index(self.0 + cell as usize)
    }
}

impl Add<usize> for MapOffset {
    type Output = MapOffset;

    fn add(self, cells: usize) -> Self {
        MapOffset(self.0 + cells)
    }
}

impl TileIndex {
    pub fn from_word(word: u16) -> Self {
        Self(word & 0x7FF)
    }
}

impl PaletteBank {
    pub fn from_hi_byte(hi: u8) -> Self {
        Self((hi >> 4) & 0x0F)
    }
}

impl Display for Tile2x2ByteOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}

impl Display for Tile2x2Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}

impl Display for ChunkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}", self.0)
    }
}

impl Display for MapOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / ${:04X}", self.0, self.0)
    }
}

impl Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}

impl Display for PaletteBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
