//! pixeldetail
//!
//! Magnifies an image into a gridded inspection image with every pixel's
//! channel values written inside its block. The rendering core lives in the
//! `detail-render` crate; this library adds configuration, file handling and
//! the pipeline the binary drives, and is exposed for integration testing.

pub mod error;
pub mod models;
pub mod services;
