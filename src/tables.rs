// Decoded, immutable views of the five input files.
mod atlas;
mod flat_map;
mod master_map;
mod palette;
mod tile2x2;

pub use atlas::{Tile, TileAtlas};
pub use flat_map::FlatMap;
pub use master_map::{MasterMap, MasterMapEntry, Side};
pub use palette::PaletteTable;
pub use tile2x2::{Quadrant, Tile2x2Entry, Tile2x2Table};

// Split a buffer into fixed-size records. A trailing partial record is dropped
// without complaint.
fn records(data: &[u8], size: usize) -> std::slice::ChunksExact<'_, u8> {
    data.chunks_exact(size)
}
