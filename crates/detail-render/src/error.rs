//! Error type for the detail-render crate.
//!
//! [`RenderError`] covers the few ways a caller can hand the renderer
//! unusable input, including a source and block size whose canvas would
//! not be addressable.

use std::fmt;

/// Which axis of a block a size error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal extent (`--wide`)
    Wide,
    /// Vertical extent (`--tall`)
    Tall,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Wide => write!(f, "wide"),
            Axis::Tall => write!(f, "tall"),
        }
    }
}

/// Errors produced while preparing a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Block dimension below the minimum that keeps stamped text inside the block
    BlockTooSmall {
        /// Offending axis
        axis: Axis,
        /// Requested size
        value: u32,
        /// Smallest accepted size
        minimum: u32,
    },
    /// No stencil exists for this character
    UnsupportedGlyph(char),
    /// Source image has a zero dimension
    EmptySource {
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },
    /// Pixel buffer length does not match `width * height * 3`
    SourceLength {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
    /// Canvas for this source and block size exceeds `u32` dimensions or
    /// the address space
    CanvasTooLarge {
        /// Source width
        width: u32,
        /// Source height
        height: u32,
        /// Block width
        block_wide: u32,
        /// Block height
        block_tall: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::BlockTooSmall {
                axis,
                value,
                minimum,
            } => write!(
                f,
                "block {} size {} is below the minimum of {}",
                axis, value, minimum
            ),
            RenderError::UnsupportedGlyph(ch) => {
                write!(f, "no glyph for character {:?}", ch)
            }
            RenderError::EmptySource { width, height } => {
                write!(f, "source image {}x{} has no pixels", width, height)
            }
            RenderError::SourceLength { expected, actual } => write!(
                f,
                "source buffer holds {} bytes, expected {}",
                actual, expected
            ),
            RenderError::CanvasTooLarge {
                width,
                height,
                block_wide,
                block_tall,
            } => write!(
                f,
                "a {}x{} source with {}x{} blocks is too large to render",
                width, height, block_wide, block_tall
            ),
        }
    }
}

impl std::error::Error for RenderError {}
