//! The three-pass detail renderer.

use super::stamp::StampJob;
use super::style::{RenderStyle, CHAR_PITCH};
use crate::canvas::{DetailCanvas, SourceImage};
use crate::error::RenderError;
use crate::geometry::{block_origin, canvas_byte_len, canvas_size, grid_line_coords, BlockSize};

/// Rendering stages, reported in order to [`Renderer::render_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// Fill every block with its source pixel's colour
    Replicate,
    /// Paint the horizontal grid lines
    HorizontalLines,
    /// Paint the vertical grid lines
    VerticalLines,
    /// Stamp channel values into each block
    Annotate,
}

/// Turns a [`SourceImage`] into a magnified, gridded, annotated canvas.
///
/// # Example
///
/// ```
/// use detail_render::{BlockSize, Pixel, Renderer, RenderStyle, SourceImage};
///
/// let data = [10, 20, 30];
/// let source = SourceImage::new(1, 1, &data).unwrap();
/// let renderer = Renderer::new(BlockSize::default(), RenderStyle::new());
/// let canvas = renderer.render(&source).unwrap();
///
/// assert_eq!((canvas.width(), canvas.height()), (50, 50));
/// assert_eq!(canvas.pixel(1, 1), Pixel::new(10, 20, 30));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    block: BlockSize,
    style: RenderStyle,
}

impl Renderer {
    pub fn new(block: BlockSize, style: RenderStyle) -> Self {
        Self { block, style }
    }

    #[inline]
    pub fn block(&self) -> BlockSize {
        self.block
    }

    /// Render without progress reporting.
    pub fn render(&self, source: &SourceImage<'_>) -> Result<DetailCanvas, RenderError> {
        self.render_with(source, |_| {})
    }

    /// Render, calling `on_pass` as each stage begins.
    ///
    /// Stage order is fixed: replicate, horizontal lines, vertical lines,
    /// annotate. Vertical lines therefore win at grid intersections, and
    /// text is never covered by a later stage.
    ///
    /// Fails with [`RenderError::CanvasTooLarge`] before allocating when
    /// the canvas would not fit in `u32` dimensions or in memory.
    pub fn render_with<F>(
        &self,
        source: &SourceImage<'_>,
        mut on_pass: F,
    ) -> Result<DetailCanvas, RenderError>
    where
        F: FnMut(RenderPass),
    {
        let (width, height) = (source.width(), source.height());
        let (wide, tall) = canvas_size(width, height, self.block)
            .filter(|_| {
                canvas_byte_len(width, height, self.block)
                    .is_some_and(|bytes| usize::try_from(bytes).is_ok())
            })
            .ok_or_else(|| self.too_large(source))?;
        let mut canvas = DetailCanvas::new(wide, tall, self.style.fill());

        on_pass(RenderPass::Replicate);
        self.replicate(source, &mut canvas)?;

        on_pass(RenderPass::HorizontalLines);
        self.draw_horizontal_lines(&mut canvas);

        on_pass(RenderPass::VerticalLines);
        self.draw_vertical_lines(&mut canvas);

        on_pass(RenderPass::Annotate);
        self.annotate(source, &mut canvas)?;

        Ok(canvas)
    }

    fn too_large(&self, source: &SourceImage<'_>) -> RenderError {
        RenderError::CanvasTooLarge {
            width: source.width(),
            height: source.height(),
            block_wide: self.block.wide(),
            block_tall: self.block.tall(),
        }
    }

    fn origin(
        &self,
        source: &SourceImage<'_>,
        w: u32,
        t: u32,
    ) -> Result<(u32, u32), RenderError> {
        block_origin(w, t, self.block).ok_or_else(|| self.too_large(source))
    }

    fn replicate(
        &self,
        source: &SourceImage<'_>,
        canvas: &mut DetailCanvas,
    ) -> Result<(), RenderError> {
        for (w, t, pixel) in source.pixels() {
            let (x0, y0) = self.origin(source, w, t)?;
            canvas.fill_rect(x0, y0, self.block.wide(), self.block.tall(), pixel);
        }
        Ok(())
    }

    fn draw_horizontal_lines(&self, canvas: &mut DetailCanvas) {
        let (wide, tall) = (canvas.width(), canvas.height());
        for y in grid_line_coords(tall, self.block.tall()).filter(|&y| y < tall) {
            canvas.fill_rect(0, y, wide, 1, self.style.line());
        }
    }

    fn draw_vertical_lines(&self, canvas: &mut DetailCanvas) {
        let (wide, tall) = (canvas.width(), canvas.height());
        for x in grid_line_coords(wide, self.block.wide()).filter(|&x| x < wide) {
            for y in 0..tall {
                canvas.put_pixel(x, y, self.style.line());
            }
        }
    }

    fn annotate(
        &self,
        source: &SourceImage<'_>,
        canvas: &mut DetailCanvas,
    ) -> Result<(), RenderError> {
        for (w, t, pixel) in source.pixels() {
            let origin = self.origin(source, w, t)?;
            if let Some(job) = StampJob::for_pixel(pixel, origin, &self.style) {
                self.stamp(canvas, &job)?;
            }
        }
        Ok(())
    }

    /// Paint a planned annotation onto `canvas`.
    ///
    /// Each line's text is drawn through [`GlyphTable::glyph_of`], one
    /// character cell every [`CHAR_PITCH`] pixels.
    ///
    /// [`GlyphTable::glyph_of`]: crate::GlyphTable::glyph_of
    pub fn stamp(&self, canvas: &mut DetailCanvas, job: &StampJob) -> Result<(), RenderError> {
        let glyphs = self.style.glyphs();
        for line in &job.lines {
            let mut x = line.x;
            for ch in line.text().chars() {
                for &(dx, dy) in glyphs.glyph_of(ch)?.cells() {
                    canvas.put_pixel(x + dx as u32, line.y + dy as u32, job.colour);
                }
                x += CHAR_PITCH;
            }
        }
        Ok(())
    }
}
