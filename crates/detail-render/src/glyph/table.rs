//! Digit stencils drawn as character art.
//!
//! Each digit is seven rows of five columns; `#` marks a painted cell.
//! The art is converted once into offset lists and memoized for the life
//! of the process.

use std::sync::OnceLock;

use crate::error::RenderError;

/// Width of a glyph cell in pixels.
pub const CELL_WIDE: u32 = 5;

/// Height of a glyph cell in pixels.
pub const CELL_TALL: u32 = 7;

const MARK: u8 = b'#';

#[rustfmt::skip]
const DIGIT_ART: [[&str; CELL_TALL as usize]; 10] = [
    [" ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "],
    ["  #  ", " ##  ", "# #  ", "  #  ", "  #  ", "  #  ", "#####"],
    [" ####", "#   #", "    #", " ### ", "#    ", "#    ", "#####"],
    ["#####", "    #", "    #", " ### ", "    #", "    #", "#####"],
    ["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "],
    ["#####", "#    ", "#    ", "#### ", "    #", "    #", "#### "],
    ["#####", "#    ", "#    ", "#####", "#   #", "#   #", "#####"],
    ["#####", "    #", "   # ", "  #  ", "  #  ", "  #  ", "  #  "],
    [" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "],
    ["#####", "#   #", "#   #", "#####", "    #", "    #", "#####"],
];

/// The painted cells of one character, as `(column, row)` offsets from the
/// top-left of its cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    cells: Vec<(u8, u8)>,
}

impl Glyph {
    /// Convert character art into offsets, row-major.
    fn from_art(rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == MARK)
                    .map(move |(col, _)| (col as u8, row as u8))
            })
            .collect();
        Self { cells }
    }

    /// Painted offsets in row-major order.
    #[inline]
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    /// Number of painted cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Immutable lookup from decimal digit to [`Glyph`].
#[derive(Debug)]
pub struct GlyphTable {
    digits: [Glyph; 10],
}

impl GlyphTable {
    /// The process-wide digit table, built on first use.
    pub fn standard() -> &'static GlyphTable {
        static TABLE: OnceLock<GlyphTable> = OnceLock::new();
        TABLE.get_or_init(Self::build)
    }

    fn build() -> Self {
        Self {
            digits: std::array::from_fn(|d| Glyph::from_art(&DIGIT_ART[d])),
        }
    }

    /// Stencil for `ch`.
    ///
    /// Only ASCII digits `'0'..='9'` have glyphs; anything else yields
    /// [`RenderError::UnsupportedGlyph`].
    pub fn glyph_of(&self, ch: char) -> Result<&Glyph, RenderError> {
        ch.to_digit(10)
            .and_then(|d| self.digits.get(d as usize))
            .ok_or(RenderError::UnsupportedGlyph(ch))
    }
}
