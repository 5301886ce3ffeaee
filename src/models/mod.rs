pub mod config;
pub mod detail_path;

pub use config::{DetailConfig, CONFIG_ENV, DEFAULT_MAX_CANVAS_BYTES};
pub use detail_path::{DetailPath, ImageKind, DETAIL_SUFFIX, MIN_FILENAME_LEN};
