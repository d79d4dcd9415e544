use crate::{
    common::{Color, ColorIdx, BANK_SIZE},
    units::PaletteBank,
};

use super::records;

/// Flat list of RGB colors, addressed as 16-color banks.
#[derive(Clone, Debug, Default)]
pub struct PaletteTable {
    colors: Vec<Color>,
}

impl PaletteTable {
    pub fn parse(data: &[u8]) -> Self {
        let colors = records(data, 3)
            .map(|c| Color::new(c[0], c[1], c[2]))
            .collect();
        PaletteTable { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of complete 16-color banks.
    pub fn bank_count(&self) -> usize {
        self.colors.len() / BANK_SIZE
    }

    pub fn has_bank(&self, bank: PaletteBank) -> bool {
        (bank.0 as usize) < self.bank_count()
    }

    pub fn color(&self, bank: PaletteBank, idx: ColorIdx) -> Option<Color> {
        self.colors
            .get(bank.0 as usize * BANK_SIZE + idx as usize)
            .copied()
    }
}
