//! Rendering a source image into a detail canvas.
//!
//! [`Renderer`] runs the passes, [`RenderStyle`] carries the colours and
//! font, and [`StampJob`] plans the digits written into a single block.

mod renderer;
mod stamp;
mod style;

pub use renderer::{RenderPass, Renderer};
pub use stamp::{StampJob, StampLine};
pub use style::{
    RenderStyle, BACKGROUND, CHAR_PITCH, DARK_THRESHOLD, LINE_COLOUR, PADDING_NEWLINE,
    PADDING_TALL, PADDING_WIDE,
};
