//! Immutable drawing parameters shared by every render.
//!
//! The padding and pitch constants are tied to [`MIN_BLOCK_WIDE`] and
//! [`MIN_BLOCK_TALL`]: three glyphs at [`CHAR_PITCH`] after [`PADDING_WIDE`],
//! and three lines at [`PADDING_NEWLINE`] after [`PADDING_TALL`], must stay
//! inside the smallest block. They are therefore constants, not options.
//!
//! [`MIN_BLOCK_WIDE`]: crate::MIN_BLOCK_WIDE
//! [`MIN_BLOCK_TALL`]: crate::MIN_BLOCK_TALL

use crate::glyph::GlyphTable;
use crate::pixel::Pixel;

/// Horizontal gap between a block's left edge and its text.
pub const PADDING_WIDE: u32 = 4;

/// Vertical gap between a block's top edge and its first text line.
pub const PADDING_TALL: u32 = 4;

/// Distance between consecutive text lines.
pub const PADDING_NEWLINE: u32 = 10;

/// Horizontal advance per character.
pub const CHAR_PITCH: u32 = 6;

/// Blocks whose channel average is below this get light text.
pub const DARK_THRESHOLD: u8 = 128;

/// Default grid line colour.
pub const LINE_COLOUR: Pixel = Pixel::grey(128);

/// Default canvas fill before any pass runs.
pub const BACKGROUND: Pixel = Pixel::grey(128);

/// Colours and font used by the [`Renderer`](crate::Renderer).
///
/// Construct once with [`RenderStyle::new`] and adjust with the builder
/// methods:
///
/// ```
/// use detail_render::{Pixel, RenderStyle};
///
/// let style = RenderStyle::new().line_colour(Pixel::new(255, 0, 0));
/// assert_eq!(style.line(), Pixel::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    line: Pixel,
    background: Pixel,
    light_text: Pixel,
    dark_text: Pixel,
    glyphs: &'static GlyphTable,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line: LINE_COLOUR,
            background: BACKGROUND,
            light_text: Pixel::WHITE,
            dark_text: Pixel::BLACK,
            glyphs: GlyphTable::standard(),
        }
    }
}

impl RenderStyle {
    /// Style with the default colours and the standard digit font.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid line colour.
    pub fn line_colour(mut self, colour: Pixel) -> Self {
        self.line = colour;
        self
    }

    /// Set the initial canvas fill.
    pub fn background(mut self, colour: Pixel) -> Self {
        self.background = colour;
        self
    }

    #[inline]
    pub fn line(&self) -> Pixel {
        self.line
    }

    #[inline]
    pub fn fill(&self) -> Pixel {
        self.background
    }

    #[inline]
    pub fn glyphs(&self) -> &'static GlyphTable {
        self.glyphs
    }

    /// Text colour that contrasts with a block of colour `pixel`.
    #[inline]
    pub fn text_colour_for(&self, pixel: Pixel) -> Pixel {
        if pixel.average() < DARK_THRESHOLD {
            self.light_text
        } else {
            self.dark_text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{CELL_TALL, CELL_WIDE};
    use crate::{MIN_BLOCK_TALL, MIN_BLOCK_WIDE};

    #[test]
    fn test_text_fits_smallest_block() {
        // Offsets are relative to the block's first interior pixel.
        let right = PADDING_WIDE + 2 * CHAR_PITCH + CELL_WIDE;
        let bottom = PADDING_TALL + 2 * PADDING_NEWLINE + CELL_TALL;
        assert!(right <= MIN_BLOCK_WIDE, "text reaches column {right}");
        assert!(bottom <= MIN_BLOCK_TALL, "text reaches row {bottom}");
    }

    #[test]
    fn test_text_colour_threshold() {
        let style = RenderStyle::new();
        assert_eq!(style.text_colour_for(Pixel::new(10, 20, 30)), Pixel::WHITE);
        assert_eq!(style.text_colour_for(Pixel::new(127, 128, 128)), Pixel::WHITE);
        assert_eq!(style.text_colour_for(Pixel::grey(128)), Pixel::BLACK);
        assert_eq!(style.text_colour_for(Pixel::new(200, 10, 200)), Pixel::BLACK);
    }

    #[test]
    fn test_builder_overrides() {
        let style = RenderStyle::new()
            .line_colour(Pixel::new(1, 2, 3))
            .background(Pixel::new(4, 5, 6));
        assert_eq!(style.line(), Pixel::new(1, 2, 3));
        assert_eq!(style.fill(), Pixel::new(4, 5, 6));
    }
}
