//! Pixel buffers: the borrowed source and the owned detail canvas.
//!
//! Both store packed RGB8 in row-major order, matching what image decoders
//! and encoders exchange.

use crate::error::RenderError;
use crate::pixel::Pixel;

/// Read-only view over a decoded RGB8 image.
#[derive(Debug, Clone, Copy)]
pub struct SourceImage<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> SourceImage<'a> {
    /// Wrap packed RGB8 bytes.
    ///
    /// Fails if either dimension is zero or `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySource { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(RenderError::SourceLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Pixel([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// All pixels with their coordinates, column by column.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y, self.pixel(x, y))))
    }
}

/// Owned, mutable RGB8 canvas the renderer paints into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DetailCanvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Pixel) -> Self {
        let data = background
            .channels()
            .repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        let i = self.index(x, y);
        Pixel([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let i = self.index(x, y);
        self.data[i..i + 3].copy_from_slice(&pixel.0);
    }

    /// Fill the `wide x tall` rectangle whose top-left corner is `(x0, y0)`.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, wide: u32, tall: u32, pixel: Pixel) {
        assert!(
            x0.checked_add(wide).is_some_and(|end| end <= self.width),
            "rect overruns canvas row"
        );
        let span = pixel.channels().repeat(wide as usize);
        for y in y0..y0 + tall {
            let start = self.index(x0, y);
            self.data[start..start + span.len()].copy_from_slice(&span);
        }
    }

    /// Packed RGB8 bytes, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x},{y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rejects_empty() {
        assert_eq!(
            SourceImage::new(0, 3, &[]).unwrap_err(),
            RenderError::EmptySource {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn test_source_rejects_wrong_length() {
        let data = [0u8; 5];
        assert_eq!(
            SourceImage::new(1, 2, &data).unwrap_err(),
            RenderError::SourceLength {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_source_pixel_lookup() {
        // 2x2: red, green / blue, white
        let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let source = SourceImage::new(2, 2, &data).unwrap();
        assert_eq!(source.pixel(1, 0), Pixel::new(0, 255, 0));
        assert_eq!(source.pixel(0, 1), Pixel::new(0, 0, 255));
        let order: Vec<(u32, u32)> = source.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_canvas_background_and_put() {
        let mut canvas = DetailCanvas::new(3, 2, Pixel::grey(128));
        assert_eq!(canvas.as_raw().len(), 18);
        assert!(canvas.as_raw().iter().all(|&b| b == 128));

        canvas.put_pixel(2, 1, Pixel::new(1, 2, 3));
        assert_eq!(canvas.pixel(2, 1), Pixel::new(1, 2, 3));
        assert_eq!(&canvas.as_raw()[15..], &[1, 2, 3]);
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = DetailCanvas::new(4, 4, Pixel::BLACK);
        canvas.fill_rect(1, 1, 2, 2, Pixel::WHITE);
        for y in 0..4 {
            for x in 0..4 {
                let inside = (1..3).contains(&x) && (1..3).contains(&y);
                let expected = if inside { Pixel::WHITE } else { Pixel::BLACK };
                assert_eq!(canvas.pixel(x, y), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside 3x2 canvas")]
    fn test_put_out_of_bounds_panics() {
        let mut canvas = DetailCanvas::new(3, 2, Pixel::BLACK);
        canvas.put_pixel(3, 0, Pixel::WHITE);
    }
}
