//! Assertion helpers for detail images.

use std::path::Path;

use image::RgbImage;
use pretty_assertions::assert_eq;

/// Load an image file as RGB8, failing the test if it cannot be read.
pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display()))
        .into_rgb8()
}

/// Assert that the image at `path` has the given dimensions.
pub fn assert_dimensions(path: &Path, expected: (u32, u32)) -> RgbImage {
    let image = load_rgb(path);
    assert_eq!(
        image.dimensions(),
        expected,
        "Unexpected dimensions for {}",
        path.display()
    );
    image
}

/// Assert every grid line pixel has the line colour.
pub fn assert_grid(image: &RgbImage, block: (u32, u32), line: [u8; 3]) {
    let (width, height) = image.dimensions();
    for x in (0..width).step_by(block.0 as usize + 1) {
        for y in 0..height {
            assert_eq!(image.get_pixel(x, y).0, line, "vertical line at ({x},{y})");
        }
    }
    for y in (0..height).step_by(block.1 as usize + 1) {
        for x in 0..width {
            assert_eq!(image.get_pixel(x, y).0, line, "horizontal line at ({x},{y})");
        }
    }
}

/// Count interior pixels of block `(w, t)` that differ from `fill`.
pub fn count_marks(image: &RgbImage, block: (u32, u32), w: u32, t: u32, fill: [u8; 3]) -> usize {
    let x0 = w * (block.0 + 1) + 1;
    let y0 = t * (block.1 + 1) + 1;
    let mut marks = 0;
    for y in y0..y0 + block.1 {
        for x in x0..x0 + block.0 {
            if image.get_pixel(x, y).0 != fill {
                marks += 1;
            }
        }
    }
    marks
}

/// Assert the bytes at `path` start with the PNG signature.
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path).expect("read output");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "not a PNG: {}", path.display());
}
