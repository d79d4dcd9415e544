// Walks the index chains (map cell -> tile2x2 entry -> four tiles -> packed
// pixels) and blits the result into a canvas.
use itertools::iproduct;
use log::debug;

use crate::{
    common::{Color, PixelCoord, BLOCK_SIZE, SUPERTILE_CELLS, TILE_SIZE},
    diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Location},
    overlay::Label,
    pixels::PixelBuffer,
    tables::{
        FlatMap, MasterMapEntry, PaletteTable, Side, Tile, Tile2x2Entry, Tile2x2Table, TileAtlas,
    },
    units::{PaletteBank, Tile2x2Index},
};

/// Copy one 16x16 tile onto the canvas with its top-left corner at `(x, y)`.
/// Pixels whose color is missing from the palette are left as they were.
pub fn blit_tile(
    canvas: &mut PixelBuffer,
    tile: Tile<'_>,
    palette: &PaletteTable,
    bank: PaletteBank,
    x: i64,
    y: i64,
) {
    for ty in 0..TILE_SIZE as usize {
        for (tx, color_idx) in tile.row(ty).enumerate() {
            if let Some(color) = palette.color(bank, color_idx) {
                canvas.set_pixel(x + tx as i64, y + ty as i64, color);
            }
        }
    }
}

/// The decoded tables a render draws from.
#[derive(Copy, Clone)]
pub struct Sources<'a> {
    pub tiles: &'a TileAtlas,
    pub palette: &'a PaletteTable,
    pub blocks: &'a Tile2x2Table,
}

/// Output of a single render.
#[derive(Debug)]
pub struct Render {
    pub canvas: PixelBuffer,
    pub diagnostics: Diagnostics,
    pub labels: Vec<Label>,
}

pub struct Compositor<'a> {
    src: Sources<'a>,
    canvas: PixelBuffer,
    diagnostics: Diagnostics,
    labels: Vec<Label>,
}

impl<'a> Compositor<'a> {
    pub fn new(src: Sources<'a>, width: PixelCoord, height: PixelCoord, background: Color) -> Self {
        Compositor {
            src,
            canvas: PixelBuffer::new(width, height, background),
            diagnostics: Diagnostics::default(),
            labels: vec![],
        }
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn report(&mut self, kind: DiagnosticKind, index: usize, location: Location) {
        self.diagnostics.report(Diagnostic {
            kind,
            index,
            location,
            quadrant: None,
        });
    }

    pub fn add_label(&mut self, x: i64, y: i64, text: String) {
        self.labels.push(Label { x, y, text });
    }

    /// Draw a 32x32 block. Each quadrant is skipped on its own if its tile is
    /// missing; a missing palette bank skips the whole block.
    pub fn blit_block(&mut self, entry: &Tile2x2Entry, x: i64, y: i64, location: Location) {
        let bank = entry.palette();
        if !self.src.palette.has_bank(bank) {
            self.report(DiagnosticKind::PaletteBankOutOfRange, bank.0 as usize, location);
            return;
        }
        let tiles = self.src.tiles;
        for (quadrant, tile_idx) in entry.quadrants() {
            let Some(tile) = tiles.tile(tile_idx) else {
                self.diagnostics.report(Diagnostic {
                    kind: DiagnosticKind::TileOutOfRange,
                    index: tile_idx.0 as usize,
                    location,
                    quadrant: Some(quadrant),
                });
                continue;
            };
            let (dx, dy) = quadrant.offset();
            blit_tile(
                &mut self.canvas,
                tile,
                self.src.palette,
                bank,
                x + dx as i64,
                y + dy as i64,
            );
        }
    }

    /// Look up a tile2x2 entry and draw it. Returns false if it was skipped.
    pub fn blit_index(&mut self, idx: Tile2x2Index, x: i64, y: i64, location: Location) -> bool {
        let blocks = self.src.blocks;
        match blocks.get(idx) {
            Some(entry) => {
                debug!("block {} at ({}, {})", idx, x, y);
                self.blit_block(entry, x, y, location);
                true
            }
            None => {
                self.report(DiagnosticKind::Tile2x2OutOfRange, idx.0, location);
                false
            }
        }
    }

    /// Draw the 256x256 super-tile referenced by a master-map entry. Row 0 of
    /// the chunk is the bottom row of the super-tile.
    pub fn blit_supertile(
        &mut self,
        map: &FlatMap,
        entry: &MasterMapEntry,
        entry_idx: usize,
        side: Side,
        x: i64,
        y: i64,
    ) {
        let start = entry.chunk_offset();
        if start.0 >= map.len() {
            self.report(
                DiagnosticKind::MapChunkOutOfRange,
                start.0,
                Location::Supertile {
                    entry: entry_idx,
                    side,
                    cell: None,
                },
            );
            return;
        }
        let base = entry.base_index();
        for (row, col) in iproduct!(0..SUPERTILE_CELLS, 0..SUPERTILE_CELLS) {
            let cell = row * SUPERTILE_CELLS + col;
            let location = Location::Supertile {
                entry: entry_idx,
                side,
                cell: Some(cell),
            };
            // A chunk may run off the end of the map; draw what is there.
            let Some(value) = map.get(start + cell) else {
                self.report(DiagnosticKind::MapCellOutOfRange, (start + cell).0, location);
                continue;
            };
            let bx = x + (col as PixelCoord * BLOCK_SIZE) as i64;
            let by = y + ((SUPERTILE_CELLS - 1 - row) as PixelCoord * BLOCK_SIZE) as i64;
            self.blit_index(base + value, bx, by, location);
        }
    }

    pub fn finish(self) -> Render {
        Render {
            canvas: self.canvas,
            diagnostics: self.diagnostics,
            labels: self.labels,
        }
    }
}
