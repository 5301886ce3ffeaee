//! detail-render: magnified pixel inspection images
//!
//! Every source pixel becomes a solid block, blocks are separated by
//! one-pixel grid lines, and each block is stamped with its channel values
//! in a built-in 5x7 digit font. No font files or text shaping are involved.
//!
//! # Quick Start
//!
//! ```
//! use detail_render::{BlockSize, Pixel, Renderer, RenderStyle, SourceImage};
//!
//! // A 2x1 image: dark teal, mid grey
//! let data = [10, 20, 30, 100, 100, 100];
//! let source = SourceImage::new(2, 1, &data).unwrap();
//!
//! let block = BlockSize::new(23, 33).unwrap();
//! let canvas = Renderer::new(block, RenderStyle::new()).render(&source).unwrap();
//!
//! assert_eq!(canvas.width(), 2 * 24 + 1);
//! assert_eq!(canvas.height(), 34 + 1);
//! assert_eq!(canvas.pixel(0, 0), Pixel::grey(128)); // grid line
//! ```
//!
//! # Layout
//!
//! For a `W x H` source and a `wide x tall` block:
//!
//! - canvas is `W*(wide+1)+1` by `H*(tall+1)+1`
//! - block `(w, t)` starts at `(w*(wide+1)+1, t*(tall+1)+1)`
//! - grid lines sit on every multiple of `wide+1` (columns) and `tall+1` (rows)
//!
//! # Annotation
//!
//! Pure black and pure white blocks are left bare. Grey blocks (R = G = B)
//! carry one three-digit value, all others carry R, G and B on three lines.
//! Text is white on blocks whose channel mean is below 128, black otherwise.
//!
//! Channels are 8-bit; callers convert deeper images before building a
//! [`SourceImage`].

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod pixel;
pub mod render;

pub use canvas::{DetailCanvas, SourceImage};
pub use error::{Axis, RenderError};
pub use geometry::{
    block_origin, canvas_byte_len, canvas_size, grid_line_coords, BlockSize, DEFAULT_BLOCK_TALL,
    DEFAULT_BLOCK_WIDE, MIN_BLOCK_TALL, MIN_BLOCK_WIDE,
};
pub use glyph::{Glyph, GlyphTable};
pub use pixel::Pixel;
pub use render::{
    RenderPass, RenderStyle, Renderer, StampJob, StampLine, BACKGROUND, LINE_COLOUR,
};
