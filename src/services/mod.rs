pub mod detail_pipeline;
pub mod image_io;

pub use detail_pipeline::{DetailOutcome, DetailPipeline};
pub use image_io::DecodedImage;
