// The three canvas layouts: flat map, master map and the raw tile2x2 atlas.
use log::info;

use crate::{
    common::{Color, PixelCoord, BLOCK_SIZE, MAP_ROW_WIDTH, SUPERTILE_SIZE},
    compositor::{Compositor, Render, Sources},
    diagnostics::{DiagnosticKind, Location},
    helpers::{flat_block_label, supertile_label},
    tables::{FlatMap, MasterMap, Side},
    units::Tile2x2Index,
};

const LABEL_INTERVAL: usize = 64;

/// Top-left pixel of flat-map cell `i`. The first map row is the bottom of the
/// image. Cells in a trailing partial row have no position.
pub fn flat_cell_origin(i: usize, total_rows: usize) -> Option<(PixelCoord, PixelCoord)> {
    let col = i % MAP_ROW_WIDTH;
    let row = i / MAP_ROW_WIDTH;
    if row >= total_rows {
        return None;
    }
    Some((
        col as PixelCoord * BLOCK_SIZE,
        (total_rows - 1 - row) as PixelCoord * BLOCK_SIZE,
    ))
}

pub fn render_flat(src: Sources, map: &FlatMap, background: Color, debug_blocks: bool) -> Render {
    let total_rows = map.rows();
    let width = MAP_ROW_WIDTH as PixelCoord * BLOCK_SIZE;
    let height = total_rows as PixelCoord * BLOCK_SIZE;
    info!("Rendering {} map cells onto {}x{} canvas", map.len(), width, height);

    let mut comp = Compositor::new(src, width, height, background);
    for (i, &cell) in map.cells().iter().enumerate() {
        let location = Location::MapCell(i);
        let idx = Tile2x2Index(cell as usize);
        let Some(entry) = src.blocks.get(idx) else {
            comp.report(DiagnosticKind::Tile2x2OutOfRange, idx.0, location);
            continue;
        };
        let Some((x, y)) = flat_cell_origin(i, total_rows) else {
            comp.report(DiagnosticKind::CellOutsideCanvas, idx.0, location);
            continue;
        };
        comp.blit_block(entry, x as i64, y as i64, location);

        if debug_blocks && i % LABEL_INTERVAL == 0 {
            let half = SUPERTILE_SIZE as i64 / 2;
            comp.add_label(x as i64 + half, y as i64 + half, flat_block_label(i));
        }
    }
    comp.finish()
}

/// Top-left pixel of the super-tile for master-map row `row`; row 0 is at the
/// bottom.
pub fn master_origin(row: usize, side: Side, num_rows: usize) -> (PixelCoord, PixelCoord) {
    (
        side.column() * SUPERTILE_SIZE,
        (num_rows - 1 - row) as PixelCoord * SUPERTILE_SIZE,
    )
}

pub fn render_master(
    src: Sources,
    map: &FlatMap,
    master: &MasterMap,
    background: Color,
    labels: bool,
) -> Render {
    let num_rows = master.row_count();
    let width = 2 * SUPERTILE_SIZE;
    let height = num_rows as PixelCoord * SUPERTILE_SIZE;
    info!("Rendering {} super-tiles onto {}x{} canvas", master.entry_count(), width, height);

    let mut comp = Compositor::new(src, width, height, background);
    for (row, (left, right)) in master.rows().enumerate() {
        for (side, entry) in [(Side::Left, left), (Side::Right, right)] {
            let entry_idx = row * 2 + side.column() as usize;
            let (x, y) = master_origin(row, side, num_rows);
            info!(
                "Row {:02} - {} entry {:03}: tile2x2 offset={}, map chunk={:02X} (offset={})",
                row,
                side,
                entry_idx,
                entry.base_offset(),
                entry.chunk.0,
                entry.chunk_offset()
            );
            if labels {
                let half = SUPERTILE_SIZE as i64 / 2;
                comp.add_label(
                    x as i64 + half,
                    y as i64 + half,
                    supertile_label(entry.base_offset(), entry.chunk),
                );
            }
            comp.blit_supertile(map, entry, entry_idx, side, x as i64, y as i64);
        }
    }
    comp.finish()
}

/// Canvas size for `count` blocks laid out `per_row` to a row.
pub fn atlas_dimensions(count: usize, per_row: usize) -> (PixelCoord, PixelCoord) {
    let rows = count.div_ceil(per_row);
    (
        per_row as PixelCoord * BLOCK_SIZE,
        rows as PixelCoord * BLOCK_SIZE,
    )
}

/// Every tile2x2 entry in reading order, top row first.
pub fn render_atlas(src: Sources, background: Color, per_row: usize) -> Render {
    let (width, height) = atlas_dimensions(src.blocks.len(), per_row);
    info!("Rendering {} blocks onto {}x{} canvas", src.blocks.len(), width, height);

    let mut comp = Compositor::new(src, width, height, background);
    for (idx, entry) in src.blocks.iter().enumerate() {
        let x = (idx % per_row) as PixelCoord * BLOCK_SIZE;
        let y = (idx / per_row) as PixelCoord * BLOCK_SIZE;
        comp.blit_block(entry, x as i64, y as i64, Location::AtlasBlock(idx));
    }
    comp.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::BYTES_PER_TILE,
        tables::{PaletteTable, Tile2x2Table, TileAtlas},
    };

    const BG: Color = Color::new(7, 7, 7);

    fn gray(n: u8) -> Option<Color> {
        Some(Color::new(n, n, n))
    }

    struct Fixture {
        tiles: TileAtlas,
        palette: PaletteTable,
        blocks: Tile2x2Table,
    }

    // 16 solid tiles (tile n is color n), a gray-ramp bank, and `blocks`
    // entries where entry n uses tile n % 16 everywhere.
    fn fixture(blocks: u8) -> Fixture {
        let mut tile_bytes = vec![];
        for n in 0..16u8 {
            tile_bytes.extend(vec![n * 0x11; BYTES_PER_TILE]);
        }
        let pal_bytes: Vec<u8> = (0..16u8).flat_map(|i| [i, i, i]).collect();
        let block_bytes: Vec<u8> = (0..blocks)
            .flat_map(|n| [n % 16, n % 16, n % 16, n % 16, 0])
            .collect();
        Fixture {
            tiles: TileAtlas::parse(&tile_bytes),
            palette: PaletteTable::parse(&pal_bytes),
            blocks: Tile2x2Table::parse(&block_bytes),
        }
    }

    impl Fixture {
        fn sources(&self) -> Sources<'_> {
            Sources {
                tiles: &self.tiles,
                palette: &self.palette,
                blocks: &self.blocks,
            }
        }
    }

    #[test]
    fn test_flat_cell_origin_inverts_rows() {
        let total_rows = 2;
        assert_eq!(flat_cell_origin(0, total_rows), Some((0, 32)));
        assert_eq!(flat_cell_origin(8, total_rows), Some((0, 0)));
        assert_eq!(flat_cell_origin(7, total_rows), Some((224, 32)));
        assert_eq!(flat_cell_origin(16, total_rows), None);
    }

    #[test]
    fn test_render_flat() {
        let fx = fixture(16);
        let cells: Vec<u8> = (0..16).collect();
        let map = FlatMap::parse(&cells);
        let render = render_flat(fx.sources(), &map, BG, false);
        assert_eq!(render.canvas.width(), 256);
        assert_eq!(render.canvas.height(), 64);
        assert!(render.diagnostics.is_empty());
        assert!(render.labels.is_empty());
        // Cell 0 bottom-left, cell 8 top-left.
        assert_eq!(render.canvas.get_pixel(0, 63), gray(0));
        assert_eq!(render.canvas.get_pixel(0, 0), gray(8));
        assert_eq!(render.canvas.get_pixel(255, 0), gray(15));
    }

    #[test]
    fn test_render_flat_out_of_range_cell() {
        let fx = fixture(4);
        let mut cells = vec![1u8; 16];
        cells[5] = 200;
        let map = FlatMap::parse(&cells);
        let render = render_flat(fx.sources(), &map, BG, false);
        let diags: Vec<_> = render.diagnostics.iter().collect();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Tile2x2OutOfRange);
        assert_eq!(diags[0].index, 200);
        assert_eq!(diags[0].location, Location::MapCell(5));
        // Cell 5 keeps the background, its neighbours render.
        assert_eq!(render.canvas.get_pixel(5 * 32, 32), Some(BG));
        assert_eq!(render.canvas.get_pixel(5 * 32 + 31, 63), Some(BG));
        assert_eq!(render.canvas.get_pixel(4 * 32, 32), gray(1));
        assert_eq!(render.canvas.get_pixel(6 * 32, 32), gray(1));
    }

    #[test]
    fn test_render_flat_partial_row() {
        let fx = fixture(4);
        let map = FlatMap::parse(&[0; 10]);
        let render = render_flat(fx.sources(), &map, BG, false);
        assert_eq!(render.canvas.height(), 32);
        assert_eq!(render.diagnostics.count(DiagnosticKind::CellOutsideCanvas), 2);
    }

    #[test]
    fn test_render_flat_debug_labels() {
        let fx = fixture(4);
        let map = FlatMap::parse(&[0; 192]);
        let render = render_flat(fx.sources(), &map, BG, true);
        let texts: Vec<&str> = render.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Block 0\n@ $0000", "Block 0\n@ $0000", "Block 1\n@ $0040"]
        );
        // Cell 64 is row 8 of 24: y = 15 * 32.
        assert_eq!(render.labels[1].x, 128);
        assert_eq!(render.labels[1].y, 15 * 32 + 128);
    }

    #[test]
    fn test_master_origin() {
        assert_eq!(master_origin(0, Side::Left, 3), (0, 512));
        assert_eq!(master_origin(0, Side::Right, 3), (256, 512));
        assert_eq!(master_origin(2, Side::Right, 3), (256, 0));
    }

    #[test]
    fn test_render_master() {
        let fx = fixture(64);
        // Chunk 0 is all zeros, chunk 1 all threes.
        let mut cells = vec![0u8; 64];
        cells.extend(vec![3u8; 64]);
        let map = FlatMap::parse(&cells);
        // Row 0: left chunk 0 base 0, right chunk 1 base 0.
        // Row 1: left chunk 0 with hi 0x01 (entry base 51), right chunk 9 (missing).
        let master = MasterMap::parse(&[0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x09]);
        let render = render_master(fx.sources(), &map, &master, BG, true);

        assert_eq!(render.canvas.width(), 512);
        assert_eq!(render.canvas.height(), 512);
        assert_eq!(render.labels.len(), 4);
        assert_eq!(render.labels[0].text, "$0000\n#00");
        assert_eq!(render.labels[2].text, "$0100\n#00");
        assert_eq!((render.labels[2].x, render.labels[2].y), (128, 128));

        // Row 0 at the bottom.
        assert_eq!(render.canvas.get_pixel(0, 300), gray(0));
        assert_eq!(render.canvas.get_pixel(300, 300), gray(3));
        // Row 1 left: entry 51 -> tile 3.
        assert_eq!(render.canvas.get_pixel(10, 10), gray(3));
        // Row 1 right: missing chunk leaves the background.
        assert_eq!(render.canvas.get_pixel(300, 10), Some(BG));
        assert_eq!(render.diagnostics.len(), 1);
        assert_eq!(render.diagnostics.count(DiagnosticKind::MapChunkOutOfRange), 1);
    }

    #[test]
    fn test_render_master_without_labels() {
        let fx = fixture(1);
        let map = FlatMap::parse(&[0; 64]);
        let master = MasterMap::parse(&[0, 0, 0, 0]);
        let render = render_master(fx.sources(), &map, &master, BG, false);
        assert!(render.labels.is_empty());
        assert_eq!(render.canvas.height(), 256);
    }

    #[test]
    fn test_atlas_dimensions() {
        assert_eq!(atlas_dimensions(0, 16), (512, 0));
        assert_eq!(atlas_dimensions(16, 16), (512, 32));
        assert_eq!(atlas_dimensions(17, 16), (512, 64));
    }

    #[test]
    fn test_render_atlas_reading_order() {
        let fx = fixture(18);
        let render = render_atlas(fx.sources(), BG, 16);
        assert_eq!(render.canvas.height(), 64);
        assert_eq!(render.canvas.get_pixel(0, 0), gray(0));
        assert_eq!(render.canvas.get_pixel(15 * 32, 0), gray(15));
        // Entry 16 wraps to the second row, left side.
        assert_eq!(render.canvas.get_pixel(0, 32), gray(0));
        assert_eq!(render.canvas.get_pixel(32, 32), gray(1));
        // Unused slots keep the background.
        assert_eq!(render.canvas.get_pixel(2 * 32, 32), Some(BG));
        assert!(render.diagnostics.is_empty());
    }

    #[test]
    fn test_render_atlas_reports_missing_tiles() {
        let fx = fixture(1);
        let blocks = Tile2x2Table::parse(&[0x20, 0x00, 0x00, 0x00, 0x00]);
        let src = Sources {
            tiles: &fx.tiles,
            palette: &fx.palette,
            blocks: &blocks,
        };
        let render = render_atlas(src, BG, 16);
        assert_eq!(render.diagnostics.count(DiagnosticKind::TileOutOfRange), 1);
        // Bottom-left missing, the rest drawn.
        assert_eq!(render.canvas.get_pixel(0, 16), Some(BG));
        assert_eq!(render.canvas.get_pixel(0, 0), gray(0));
    }
}
