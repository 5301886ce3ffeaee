//! Reading source images and writing detail images.
//!
//! Decoding always lands in packed RGB8, whatever the file holds: grey,
//! palette and 16-bit images are converted and any alpha is dropped.
//! Encoding happens in memory first so a failed encode never leaves a
//! partial file behind.

use std::io::Cursor;
use std::path::Path;

use detail_render::{DetailCanvas, RenderError, SourceImage};
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};

use crate::error::DetailError;
use crate::models::ImageKind;

/// JPEG quality for detail output.
pub const JPEG_QUALITY: u8 = 75;

/// A fully decoded RGB8 image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Packed RGB8, row-major
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Borrow as a renderer input.
    pub fn as_source(&self) -> Result<SourceImage<'_>, RenderError> {
        SourceImage::new(self.width, self.height, &self.data)
    }
}

fn open_reader(
    path: &Path,
) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, DetailError> {
    let name = path.display().to_string();
    ImageReader::open(path)
        .map_err(|_| DetailError::FileNotFound(name.clone()))?
        .with_guessed_format()
        .map_err(|_| DetailError::FileNotFound(name))
}

/// Read only the header to learn the image's dimensions.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), DetailError> {
    let reader = open_reader(path)?;
    reader.into_dimensions().map_err(|e| DetailError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Decode the whole image into RGB8.
pub fn decode(path: &Path) -> Result<DecodedImage, DetailError> {
    let image = open_reader(path)?
        .decode()
        .map_err(|e| DetailError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        color = ?image.color(),
        width = image.width(),
        height = image.height(),
        "Decoded source image"
    );

    let rgb = image.into_rgb8();
    Ok(DecodedImage {
        width: rgb.width(),
        height: rgb.height(),
        data: rgb.into_raw(),
    })
}

/// Encode `canvas` in the format named by `kind`.
pub fn encode(
    canvas: &DetailCanvas,
    kind: ImageKind,
    optimize_png: bool,
) -> Result<Vec<u8>, DetailError> {
    match kind {
        ImageKind::Png => {
            let compression = if optimize_png {
                // oxipng re-compresses, so skip the expensive first pass
                png::Compression::Fast
            } else {
                png::Compression::Default
            };
            let png_bytes = encode_png(canvas, compression)?;
            if optimize_png {
                Ok(optimize(png_bytes))
            } else {
                Ok(png_bytes)
            }
        }
        ImageKind::Bmp => {
            let mut buf = Vec::new();
            BmpEncoder::new(&mut buf)
                .write_image(
                    canvas.as_raw(),
                    canvas.width(),
                    canvas.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| DetailError::Encode(e.to_string()))?;
            Ok(buf)
        }
        ImageKind::Jpg => {
            let mut buf = Vec::new();
            JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
                .write_image(
                    canvas.as_raw(),
                    canvas.width(),
                    canvas.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| DetailError::Encode(e.to_string()))?;
            Ok(buf)
        }
    }
}

/// Encode and write `canvas` to `path`. Returns the number of bytes written.
pub fn save(
    canvas: &DetailCanvas,
    path: &Path,
    kind: ImageKind,
    optimize_png: bool,
) -> Result<usize, DetailError> {
    let bytes = encode(canvas, kind, optimize_png)?;
    std::fs::write(path, &bytes).map_err(|source| DetailError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}

/// Encode an RGB8 canvas as an 8-bit truecolour PNG.
fn encode_png(
    canvas: &DetailCanvas,
    compression: png::Compression,
) -> Result<Vec<u8>, DetailError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression);
        let mut writer = encoder
            .write_header()
            .map_err(|e| DetailError::Encode(e.to_string()))?;
        writer
            .write_image_data(canvas.as_raw())
            .map_err(|e| DetailError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress with oxipng, keeping the original bytes if that fails.
fn optimize(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}
