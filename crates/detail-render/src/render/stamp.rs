//! Planning the text stamped into one block.

use super::style::{RenderStyle, PADDING_NEWLINE, PADDING_TALL, PADDING_WIDE};
use crate::pixel::Pixel;

/// One channel value and where its three digits start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampLine {
    pub value: u8,
    pub x: u32,
    pub y: u32,
}

impl StampLine {
    /// The value as it appears on the canvas, e.g. `"007"`.
    pub fn text(&self) -> String {
        format!("{:03}", self.value)
    }
}

/// Everything needed to annotate one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampJob {
    pub colour: Pixel,
    pub lines: Vec<StampLine>,
}

impl StampJob {
    /// Plan the annotation for a block of colour `pixel` whose first
    /// interior pixel is `origin`.
    ///
    /// Pure black and pure white blocks are left bare and yield `None`.
    /// Grey pixels collapse to a single line; anything else gets R, G and B
    /// on three lines.
    pub fn for_pixel(pixel: Pixel, origin: (u32, u32), style: &RenderStyle) -> Option<Self> {
        if pixel == Pixel::BLACK || pixel == Pixel::WHITE {
            return None;
        }

        let channels = pixel.channels();
        let values: &[u8] = if pixel.is_grey() {
            &channels[..1]
        } else {
            &channels[..]
        };

        let (x0, y0) = origin;
        let lines = values
            .iter()
            .zip(0u32..)
            .map(|(&value, pcount)| StampLine {
                value,
                x: x0 + PADDING_WIDE,
                y: y0 + PADDING_TALL + pcount * PADDING_NEWLINE,
            })
            .collect();

        Some(Self {
            colour: style.text_colour_for(pixel),
            lines,
        })
    }
}
