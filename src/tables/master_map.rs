use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

use crate::units::{ChunkIndex, MapOffset, Tile2x2ByteOffset, Tile2x2Index};

use super::records;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn column(self) -> u32 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

/// Reference to one super-tile: a base into the tile2x2 table and a chunk of
/// the flat map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MasterMapEntry {
    pub hi: u8,
    pub chunk: ChunkIndex,
}

impl MasterMapEntry {
    pub fn base_offset(&self) -> Tile2x2ByteOffset {
        Tile2x2ByteOffset::from_hi_byte(self.hi)
    }

    pub fn base_index(&self) -> Tile2x2Index {
        self.base_offset().into()
    }

    pub fn chunk_offset(&self) -> MapOffset {
        self.chunk.into()
    }
}

/// Four bytes per row: left hi, left chunk, right hi, right chunk.
#[derive(Clone, Debug, Default)]
pub struct MasterMap {
    entries: Vec<MasterMapEntry>,
}

impl MasterMap {
    pub fn parse(data: &[u8]) -> Self {
        let entries = records(data, 4)
            .flat_map(|r| {
                [
                    MasterMapEntry {
                        hi: r[0],
                        chunk: ChunkIndex(r[1]),
                    },
                    MasterMapEntry {
                        hi: r[2],
                        chunk: ChunkIndex(r[3]),
                    },
                ]
            })
            .collect();
        MasterMap { entries }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn row_count(&self) -> usize {
        self.entries.len() / 2
    }

    pub fn entries(&self) -> &[MasterMapEntry] {
        &self.entries
    }

    /// (left, right) pairs in file order; row 0 is the bottom of the world.
    pub fn rows(&self) -> impl Iterator<Item = (&MasterMapEntry, &MasterMapEntry)> {
        self.entries.iter().tuples()
    }
}
