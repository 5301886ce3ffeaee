//! Embedded micro bitmap font.
//!
//! Only decimal digits are needed to annotate channel values, so the font is
//! ten hand-drawn 5x7 stencils and nothing more.

mod table;

pub use table::{Glyph, GlyphTable, CELL_TALL, CELL_WIDE};
