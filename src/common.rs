use serde::{Deserialize, Serialize};

pub type ColorValue = u8; // Color channel value (0-255)
pub type ColorIdx = u8; // Index into a 16-color palette bank (0-15)
pub type PixelCoord = u32;

pub const TILE_SIZE: PixelCoord = 16; // Tiles are 16x16 pixels
pub const BYTES_PER_TILE: usize = 128; // 16 rows of 8 bytes, two pixels per byte
pub const BLOCK_SIZE: PixelCoord = 32; // A tile2x2 block is 2x2 tiles
pub const BANK_SIZE: usize = 16; // Colors per palette bank
pub const MAP_ROW_WIDTH: usize = 8; // Flat map cells per row
pub const SUPERTILE_CELLS: usize = 8; // A super-tile is 8x8 map cells
pub const SUPERTILE_SIZE: PixelCoord = BLOCK_SIZE * SUPERTILE_CELLS as PixelCoord;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: ColorValue,
    pub green: ColorValue,
    pub blue: ColorValue,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: ColorValue, green: ColorValue, blue: ColorValue) -> Self {
        Color { red, green, blue }
    }
}
