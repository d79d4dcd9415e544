use anyhow::{ensure, Context, Result};

use crate::{
    common::{Color, ColorIdx},
    units::{ChunkIndex, Tile2x2ByteOffset},
};

// High nibble is the left pixel, low nibble the right one.
pub fn unpack_nibbles(byte: u8) -> (ColorIdx, ColorIdx) {
    ((byte & 0xF0) >> 4, byte & 0x0F)
}

pub fn pack_nibbles(left: ColorIdx, right: ColorIdx) -> u8 {
    (left & 0x0F) << 4 | (right & 0x0F)
}

/// Parse an `RRGGBB` hex triplet, with or without a leading `#`.
pub fn parse_hex_color(s: &str) -> Result<Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    ensure!(
        hex.len() == 6 && hex.is_ascii(),
        "expected RRGGBB color, got {:?}",
        s
    );
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color {:?}", s))
    };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Label drawn every 64 flat-map cells in debug mode. The label at cell `i`
/// describes the 64-cell chunk that ends there.
pub fn flat_block_label(cell: usize) -> String {
    let (block_idx, chunk_offset) = if cell == 0 {
        (0, 0)
    } else {
        (cell / 64 - 1, cell - 64)
    };
    format!("Block {}\n@ ${:04X}", block_idx, chunk_offset)
}

pub fn supertile_label(offset: Tile2x2ByteOffset, chunk: ChunkIndex) -> String {
    format!("{}\n{}", offset, chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_round_trip() {
        for b in 0..=255u8 {
            let (left, right) = unpack_nibbles(b);
            assert!(left < 16 && right < 16);
            assert_eq!(pack_nibbles(left, right), b);
        }
    }

    #[test]
    fn test_unpack_order() {
        assert_eq!(unpack_nibbles(0x0F), (0x0, 0xF));
        assert_eq!(unpack_nibbles(0xA3), (0xA, 0x3));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("102030").unwrap(), Color::new(0x10, 0x20, 0x30));
        assert_eq!(parse_hex_color("#FFfF00").unwrap(), Color::new(255, 255, 0));
        assert!(parse_hex_color("12345").is_err());
        assert!(parse_hex_color("GG0000").is_err());
        assert!(parse_hex_color("ééé").is_err());
    }

    #[test]
    fn test_flat_block_label() {
        assert_eq!(flat_block_label(0), "Block 0\n@ $0000");
        assert_eq!(flat_block_label(64), "Block 0\n@ $0000");
        assert_eq!(flat_block_label(128), "Block 1\n@ $0040");
        assert_eq!(flat_block_label(640), "Block 9\n@ $0240");
    }

    #[test]
    fn test_supertile_label() {
        let label = supertile_label(Tile2x2ByteOffset::from_hi_byte(0x12), ChunkIndex(0x03));
        assert_eq!(label, "$1200\n#03");
    }
}
