use std::path::PathBuf;

use detail_render::{Axis, RenderError};
use thiserror::Error;

/// Everything that can stop a detail run.
///
/// Display strings are the user-facing diagnostics; `main` prefixes them
/// with the program name.
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("--{flag} command line argument too small - minimum value is {minimum}")]
    BlockTooSmall { flag: &'static str, minimum: u32 },

    #[error("filename \"{0}\" is too short")]
    FilenameTooShort(String),

    #[error("filename \"{0}\" has an unsupported file type")]
    UnsupportedFileType(String),

    #[error("cannot open filename \"{0}\" for reading")]
    FileNotFound(String),

    #[error("cannot decode image \"{path}\": {message}")]
    Decode { path: String, message: String },

    #[error("cannot encode image: {0}")]
    Encode(String),

    #[error("cannot write \"{path}\": {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("detail image would need {bytes} bytes (limit {max})")]
    CanvasTooLarge { bytes: u64, max: u64 },

    #[error("configuration error in \"{path}\": {message}")]
    Config { path: PathBuf, message: String },

    #[error("render error: {0}")]
    Render(RenderError),
}

impl From<RenderError> for DetailError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::BlockTooSmall { axis, minimum, .. } => DetailError::BlockTooSmall {
                flag: match axis {
                    Axis::Wide => "wide",
                    Axis::Tall => "tall",
                },
                minimum,
            },
            other => DetailError::Render(other),
        }
    }
}
