// Recoverable problems found while compositing. Each one means a single
// drawing operation was skipped; rendering always carries on.
use std::fmt::Display;

use hashbrown::HashMap;
use log::warn;
use serde::Serialize;

use crate::tables::{Quadrant, Side};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    /// Map cell (plus master-map base) points past the end of the tile2x2 table.
    Tile2x2OutOfRange,
    /// Block quadrant points past the end of the tile atlas.
    TileOutOfRange,
    /// Block selects a palette bank that is not fully present.
    PaletteBankOutOfRange,
    /// Master-map chunk starts past the end of the flat map.
    MapChunkOutOfRange,
    /// Cell of a master-map chunk that runs off the end of the flat map.
    MapCellOutOfRange,
    /// Flat-map cell in a trailing partial row, which has no place on the canvas.
    CellOutsideCanvas,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Location {
    MapCell(usize),
    Supertile {
        entry: usize,
        side: Side,
        cell: Option<usize>,
    },
    AtlasBlock(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The offending index, in the units of the table it was checked against.
    pub index: usize,
    pub location: Location,
    pub quadrant: Option<Quadrant>,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::MapCell(i) => write!(f, "map tile {}", i),
            Location::Supertile {
                entry,
                side,
                cell: Some(cell),
            } => write!(f, "{} entry {:03} cell {}", side, entry, cell),
            Location::Supertile {
                entry,
                side,
                cell: None,
            } => write!(f, "{} entry {:03}", side, entry),
            Location::AtlasBlock(i) => write!(f, "block {}", i),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiagnosticKind::Tile2x2OutOfRange => {
                write!(f, "tile2x2 index ${:04X} out of range", self.index)?
            }
            DiagnosticKind::TileOutOfRange => {
                write!(f, "Tile index ${:04X} out of range", self.index)?
            }
            DiagnosticKind::PaletteBankOutOfRange => {
                write!(f, "Palette bank {} out of range", self.index)?
            }
            DiagnosticKind::MapChunkOutOfRange => {
                write!(f, "Map chunk at offset {} out of range", self.index)?
            }
            DiagnosticKind::MapCellOutOfRange => {
                write!(f, "Map cell at offset {} out of range", self.index)?
            }
            DiagnosticKind::CellOutsideCanvas => {
                write!(f, "Map index {} has no row on the canvas", self.index)?
            }
        }
        write!(f, " at {}", self.location)?;
        if let Some(q) = self.quadrant {
            write!(f, " ({})", q)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

#[derive(Serialize)]
pub struct KindCount {
    pub kind: DiagnosticKind,
    pub count: usize,
}

#[derive(Serialize)]
pub struct DiagnosticReport<'a> {
    pub total: usize,
    pub summary: Vec<KindCount>,
    pub diagnostics: &'a [Diagnostic],
}

impl Diagnostics {
    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.records.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.records.iter().filter(|d| d.kind == kind).count()
    }

    pub fn summary(&self) -> Vec<KindCount> {
        let mut counts: HashMap<DiagnosticKind, usize> = HashMap::new();
        for d in &self.records {
            *counts.entry(d.kind).or_insert(0) += 1;
        }
        let mut summary: Vec<KindCount> = counts
            .into_iter()
            .map(|(kind, count)| KindCount { kind, count })
            .collect();
        summary.sort_by_key(|k| k.kind);
        summary
    }

    pub fn to_report(&self) -> DiagnosticReport<'_> {
        DiagnosticReport {
            total: self.records.len(),
            summary: self.summary(),
            diagnostics: &self.records,
        }
    }
}
