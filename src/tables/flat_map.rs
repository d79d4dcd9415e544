use crate::{common::MAP_ROW_WIDTH, units::MapOffset};

/// One tile2x2 index per cell, eight cells per row, first row at the bottom.
#[derive(Clone, Debug, Default)]
pub struct FlatMap {
    cells: Vec<u8>,
}

impl FlatMap {
    pub fn parse(data: &[u8]) -> Self {
        FlatMap {
            cells: data.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of complete rows.
    pub fn rows(&self) -> usize {
        self.cells.len() / MAP_ROW_WIDTH
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, offset: MapOffset) -> Option<u8> {
        self.cells.get(offset.0).copied()
    }
}
