use std::path::PathBuf;

use detail_render::{canvas_byte_len, canvas_size, BlockSize, RenderPass, Renderer};

use crate::error::DetailError;
use crate::models::{DetailConfig, DetailPath};
use crate::services::image_io;

/// Result of a completed detail run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOutcome {
    /// Where the detail image was written
    pub output: PathBuf,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Size of the encoded file
    pub bytes_written: usize,
}

/// Orchestrates read → size check → render → save for one image.
pub struct DetailPipeline {
    config: DetailConfig,
    renderer: Renderer,
}

impl DetailPipeline {
    pub fn new(config: DetailConfig, block: BlockSize) -> Self {
        let renderer = Renderer::new(block, config.style());
        Self { config, renderer }
    }

    pub fn block(&self) -> BlockSize {
        self.renderer.block()
    }

    /// Run, printing progress lines to stdout.
    pub fn run(&self, path: &DetailPath) -> Result<DetailOutcome, DetailError> {
        self.run_with(path, |line| println!("{line}"))
    }

    /// Run, handing each progress line to `progress`.
    pub fn run_with<P>(
        &self,
        path: &DetailPath,
        mut progress: P,
    ) -> Result<DetailOutcome, DetailError>
    where
        P: FnMut(&str),
    {
        progress(&format!("Reading image file \"{}\"", path.input_name()));

        let (src_w, src_h) = image_io::probe_dimensions(path.input())?;
        self.check_canvas_bytes(src_w, src_h)?;

        let decoded = image_io::decode(path.input())?;
        if (decoded.width, decoded.height) != (src_w, src_h) {
            self.check_canvas_bytes(decoded.width, decoded.height)?;
        }
        let source = decoded.as_source()?;

        let (wide, tall) = canvas_size(source.width(), source.height(), self.block()).ok_or(
            DetailError::CanvasTooLarge {
                bytes: u64::MAX,
                max: self.config.max_canvas_bytes,
            },
        )?;
        tracing::info!(
            source_width = source.width(),
            source_height = source.height(),
            canvas_width = wide,
            canvas_height = tall,
            block_wide = self.block().wide(),
            block_tall = self.block().tall(),
            "Rendering detail image"
        );
        progress(&format!(
            "Creating new image of {} pixels",
            wide as u64 * tall as u64
        ));

        let canvas = self.renderer.render_with(&source, |pass| {
            progress(match pass {
                RenderPass::Replicate => "Copying pixels to new image",
                RenderPass::HorizontalLines => "Drawing horizontal separator lines",
                RenderPass::VerticalLines => "Drawing vertical separator lines",
                RenderPass::Annotate => "Putting RGB values into each pixel box",
            })
        })?;

        progress(&format!(
            "Saving new image to file \"{}\"",
            path.output_name()
        ));
        let bytes_written = image_io::save(
            &canvas,
            path.output(),
            path.kind(),
            self.config.optimize_png,
        )?;
        tracing::info!(
            output = %path.output().display(),
            bytes = bytes_written,
            "Saved detail image"
        );

        progress("Done");

        Ok(DetailOutcome {
            output: path.output().to_path_buf(),
            width: canvas.width(),
            height: canvas.height(),
            bytes_written,
        })
    }

    /// Refuse canvases larger than the configured limit.
    fn check_canvas_bytes(&self, width: u32, height: u32) -> Result<(), DetailError> {
        let max = self.config.max_canvas_bytes;
        match canvas_byte_len(width, height, self.block()) {
            Some(bytes) if bytes <= max => {
                tracing::debug!(bytes, max, "Canvas size within limit");
                Ok(())
            }
            Some(bytes) => Err(DetailError::CanvasTooLarge { bytes, max }),
            None => Err(DetailError::CanvasTooLarge {
                bytes: u64::MAX,
                max,
            }),
        }
    }
}
