use crate::common::{Color, PixelCoord};

/// Owned RGB raster. Writes are bounds-checked and only available inside the
/// crate; everyone else gets read access once rendering has finished.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: PixelCoord,
    height: PixelCoord,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn new(width: PixelCoord, height: PixelCoord, background: Color) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> PixelCoord {
        self.width
    }

    pub fn height(&self) -> PixelCoord {
        self.height
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    pub fn get_pixel(&self, x: PixelCoord, y: PixelCoord) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Returns false (and writes nothing) when `(x, y)` is off the canvas.
    pub(crate) fn set_pixel(&mut self, x: i64, y: i64, color: Color) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color;
        true
    }

    /// Row-major packed RGB8 bytes, as expected by the PNG encoder.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue])
            .collect()
    }
}
