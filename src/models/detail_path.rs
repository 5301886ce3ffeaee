use std::fmt;
use std::path::Path;

use crate::error::DetailError;

/// Filenames shorter than this are rejected outright.
pub const MIN_FILENAME_LEN: usize = 5;

/// Suffix inserted before the extension of the output file.
pub const DETAIL_SUFFIX: &str = "detail";

/// Image formats accepted on input and produced on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Bmp,
    Jpg,
    Png,
}

impl ImageKind {
    /// Checked in this order against the filename.
    pub const ALL: [ImageKind; 3] = [ImageKind::Bmp, ImageKind::Jpg, ImageKind::Png];

    /// Lowercase extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Bmp => "bmp",
            ImageKind::Jpg => "jpg",
            ImageKind::Png => "png",
        }
    }

    /// Match the filename's extension, ignoring ASCII case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let bytes = filename.as_bytes();
        Self::ALL.into_iter().find(|kind| {
            let ext = kind.extension().as_bytes();
            bytes.len() > ext.len()
                && bytes[bytes.len() - ext.len() - 1] == b'.'
                && bytes[bytes.len() - ext.len()..].eq_ignore_ascii_case(ext)
        })
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A validated input filename and the detail filename derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPath {
    input: String,
    output: String,
    kind: ImageKind,
}

impl DetailPath {
    /// Validate `filename` and derive `<basename>-detail.<ext>`.
    ///
    /// The output keeps the input's directory and uses the lowercase
    /// extension, so `shots/A.PNG` becomes `shots/A-detail.png`.
    pub fn parse(filename: &str) -> Result<Self, DetailError> {
        if filename.chars().count() < MIN_FILENAME_LEN {
            return Err(DetailError::FilenameTooShort(filename.to_string()));
        }

        let kind = ImageKind::from_filename(filename)
            .ok_or_else(|| DetailError::UnsupportedFileType(filename.to_string()))?;

        // The matched extension is ASCII, so this is a char boundary.
        let stem = &filename[..filename.len() - kind.extension().len() - 1];
        let output = format!("{stem}-{DETAIL_SUFFIX}.{}", kind.extension());

        Ok(Self {
            input: filename.to_string(),
            output,
            kind,
        })
    }

    /// Input filename exactly as given
    pub fn input_name(&self) -> &str {
        &self.input
    }

    pub fn input(&self) -> &Path {
        Path::new(&self.input)
    }

    pub fn output_name(&self) -> &str {
        &self.output
    }

    pub fn output(&self) -> &Path {
        Path::new(&self.output)
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }
}
