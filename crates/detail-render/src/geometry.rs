//! Coordinate mapping between source pixels and the magnified canvas.
//!
//! Every source pixel becomes a `wide x tall` block. Blocks are separated
//! (and the canvas framed) by one-pixel grid lines, so along each axis the
//! canvas repeats a period of `block + 1`:
//!
//! ```text
//! x:  0   1 .. wide   wide+1   wide+2 ..   2*(wide+1)
//!     |   block 0     |        block 1     |
//!   line            line                  line
//! ```

use crate::error::{Axis, RenderError};

/// Smallest block width that fits three glyphs plus padding.
pub const MIN_BLOCK_WIDE: u32 = 23;

/// Smallest block height that fits three text lines plus padding.
pub const MIN_BLOCK_TALL: u32 = 33;

/// Default block width.
pub const DEFAULT_BLOCK_WIDE: u32 = 48;

/// Default block height.
pub const DEFAULT_BLOCK_TALL: u32 = 48;

/// Interior size of one magnified block, validated against the minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize {
    wide: u32,
    tall: u32,
}

impl BlockSize {
    /// Validate and build a block size.
    ///
    /// Width is checked before height, so a request too small on both axes
    /// reports the width.
    pub fn new(wide: u32, tall: u32) -> Result<Self, RenderError> {
        if wide < MIN_BLOCK_WIDE {
            return Err(RenderError::BlockTooSmall {
                axis: Axis::Wide,
                value: wide,
                minimum: MIN_BLOCK_WIDE,
            });
        }
        if tall < MIN_BLOCK_TALL {
            return Err(RenderError::BlockTooSmall {
                axis: Axis::Tall,
                value: tall,
                minimum: MIN_BLOCK_TALL,
            });
        }
        Ok(Self { wide, tall })
    }

    #[inline]
    pub fn wide(&self) -> u32 {
        self.wide
    }

    #[inline]
    pub fn tall(&self) -> u32 {
        self.tall
    }

    /// Horizontal period: block width plus its grid line.
    #[inline]
    pub fn pitch_wide(&self) -> u64 {
        self.wide as u64 + 1
    }

    /// Vertical period: block height plus its grid line.
    #[inline]
    pub fn pitch_tall(&self) -> u64 {
        self.tall as u64 + 1
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self {
            wide: DEFAULT_BLOCK_WIDE,
            tall: DEFAULT_BLOCK_TALL,
        }
    }
}

/// Canvas dimensions for a `width x height` source.
///
/// Returns `None` when either dimension would not fit in a `u32`.
pub fn canvas_size(width: u32, height: u32, block: BlockSize) -> Option<(u32, u32)> {
    let wide = axis_len(width, block.pitch_wide())?;
    let tall = axis_len(height, block.pitch_tall())?;
    Some((wide, tall))
}

fn axis_len(count: u32, pitch: u64) -> Option<u32> {
    let len = (count as u64).checked_mul(pitch)?.checked_add(1)?;
    u32::try_from(len).ok()
}

/// Bytes of packed RGB needed for the canvas.
///
/// Returns `None` when the canvas dimensions do not fit in a `u32`. Callers
/// use this to refuse a render before anything is allocated.
pub fn canvas_byte_len(width: u32, height: u32, block: BlockSize) -> Option<u64> {
    let (wide, tall) = canvas_size(width, height, block)?;
    (wide as u64).checked_mul(tall as u64)?.checked_mul(3)
}

/// Top-left interior pixel of the block for source pixel `(w, t)`.
///
/// `None` if that pixel lies beyond `u32` range, which cannot happen for
/// any `(w, t)` inside a source whose [`canvas_size`] is `Some`.
#[inline]
pub fn block_origin(w: u32, t: u32, block: BlockSize) -> Option<(u32, u32)> {
    let x = (w as u64 * block.pitch_wide()).checked_add(1)?;
    let y = (t as u64 * block.pitch_tall()).checked_add(1)?;
    Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
}

/// Grid line positions along one axis: every multiple of `block_dim + 1`
/// from 0 up to and including `dim_len`.
pub fn grid_line_coords(dim_len: u32, block_dim: u32) -> impl Iterator<Item = u32> {
    (0..=dim_len).step_by((block_dim as usize).saturating_add(1))
}
