use std::fmt::Display;

use serde::Serialize;

use crate::{
    common::{PixelCoord, TILE_SIZE},
    units::{PaletteBank, Tile2x2Index, TileIndex, TILE2X2_ENTRY_SIZE},
};

use super::records;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    // Drawing order within a block.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Pixel offset of the quadrant within its 32x32 block (Y grows downward).
    pub fn offset(self) -> (PixelCoord, PixelCoord) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (TILE_SIZE, 0),
            Quadrant::BottomLeft => (0, TILE_SIZE),
            Quadrant::BottomRight => (TILE_SIZE, TILE_SIZE),
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Quadrant::TopLeft => "TL",
            Quadrant::TopRight => "TR",
            Quadrant::BottomLeft => "BL",
            Quadrant::BottomRight => "BR",
        };
        write!(f, "{}", s)
    }
}

/// One five-byte block descriptor: `b0..b3` are the low bytes of the
/// bottom-left, bottom-right, top-left and top-right tile indices (in that
/// order), and `hi` carries the shared high bits plus the palette bank.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile2x2Entry {
    pub raw: [u8; 5],
}

impl Tile2x2Entry {
    pub fn tile(&self, quadrant: Quadrant) -> TileIndex {
        let [b0, b1, b2, b3, hi] = self.raw;
        let low = match quadrant {
            Quadrant::BottomLeft => b0,
            Quadrant::BottomRight => b1,
            Quadrant::TopLeft => b2,
            Quadrant::TopRight => b3,
        };
        TileIndex::from_word(low as u16 | (hi as u16) << 8)
    }

    pub fn palette(&self) -> PaletteBank {
        PaletteBank::from_hi_byte(self.raw[4])
    }

    /// Tile indices in drawing order.
    pub fn quadrants(&self) -> [(Quadrant, TileIndex); 4] {
        Quadrant::ALL.map(|q| (q, self.tile(q)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tile2x2Table {
    entries: Vec<Tile2x2Entry>,
}

impl Tile2x2Table {
    pub fn parse(data: &[u8]) -> Self {
        let entries = records(data, TILE2X2_ENTRY_SIZE as usize)
            .map(|r| Tile2x2Entry {
                raw: [r[0], r[1], r[2], r[3], r[4]],
            })
            .collect();
        Tile2x2Table { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: Tile2x2Index) -> Option<&Tile2x2Entry> {
        self.entries.get(idx.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile2x2Entry> {
        self.entries.iter()
    }
}
