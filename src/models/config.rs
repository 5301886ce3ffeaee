use std::path::Path;

use detail_render::{
    BlockSize, Pixel, RenderStyle, BACKGROUND, DEFAULT_BLOCK_TALL, DEFAULT_BLOCK_WIDE,
    LINE_COLOUR,
};
use serde::Deserialize;

use crate::error::DetailError;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "PIXELDETAIL_CONFIG";

/// Default cap on the detail canvas: 8 GiB of packed RGB, enough for a
/// 640x480 source at the default block size.
pub const DEFAULT_MAX_CANVAS_BYTES: u64 = 8 << 30;

/// Settings loaded from an optional YAML file.
///
/// Every key may be omitted:
///
/// ```yaml
/// wide: 48
/// tall: 48
/// line_colour: [128, 128, 128]
/// background: [128, 128, 128]
/// max_canvas_bytes: 8589934592
/// optimize_png: false
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DetailConfig {
    /// Block width when `--wide` is not given
    pub wide: u32,

    /// Block height when `--tall` is not given
    pub tall: u32,

    /// Grid line colour
    pub line_colour: [u8; 3],

    /// Canvas fill before rendering
    pub background: [u8; 3],

    /// Refuse to render when the canvas would exceed this many bytes
    pub max_canvas_bytes: u64,

    /// Re-compress PNG output with oxipng
    pub optimize_png: bool,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            wide: DEFAULT_BLOCK_WIDE,
            tall: DEFAULT_BLOCK_TALL,
            line_colour: LINE_COLOUR.channels(),
            background: BACKGROUND.channels(),
            max_canvas_bytes: DEFAULT_MAX_CANVAS_BYTES,
            optimize_png: false,
        }
    }
}

impl DetailConfig {
    /// Load from `path`, or return the defaults when there is none.
    ///
    /// A named file that cannot be read or parsed is an error rather than a
    /// silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self, DetailError> {
        let Some(path) = path else {
            tracing::debug!("No configuration file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| DetailError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&content).map_err(|e| DetailError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!(
            path = %path.display(),
            wide = config.wide,
            tall = config.tall,
            max_canvas_bytes = config.max_canvas_bytes,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Block size from explicit flags, falling back to the configured values.
    pub fn block_size(
        &self,
        wide: Option<u32>,
        tall: Option<u32>,
    ) -> Result<BlockSize, DetailError> {
        let block = BlockSize::new(wide.unwrap_or(self.wide), tall.unwrap_or(self.tall))?;
        Ok(block)
    }

    /// Render style carrying the configured colours.
    pub fn style(&self) -> RenderStyle {
        RenderStyle::new()
            .line_colour(Pixel(self.line_colour))
            .background(Pixel(self.background))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DetailConfig::default();
        assert_eq!(config.wide, 48);
        assert_eq!(config.tall, 48);
        assert_eq!(config.line_colour, [128, 128, 128]);
        assert_eq!(config.max_canvas_bytes, 8 << 30);
        assert!(!config.optimize_png);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DetailConfig::from_yaml("wide: 30\nline_colour: [255, 0, 0]\n").unwrap();
        assert_eq!(config.wide, 30);
        assert_eq!(config.tall, 48);
        assert_eq!(config.line_colour, [255, 0, 0]);
        assert_eq!(config.style().line(), Pixel::new(255, 0, 0));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(DetailConfig::from_yaml("  \n").unwrap(), DetailConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DetailConfig::from_yaml("wdie: 30\n").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = DetailConfig::from_yaml("wide: 30\ntall: 40\n").unwrap();
        let block = config.block_size(Some(25), None).unwrap();
        assert_eq!((block.wide(), block.tall()), (25, 40));
    }

    #[test]
    fn test_config_block_still_validated() {
        let config = DetailConfig::from_yaml("tall: 20\n").unwrap();
        let err = config.block_size(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--tall command line argument too small - minimum value is 33"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "optimize_png: true").unwrap();
        let config = DetailConfig::load(Some(file.path())).unwrap();
        assert!(config.optimize_png);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = DetailConfig::load(Some(Path::new("/nonexistent/pixeldetail.yaml"))).unwrap_err();
        assert!(matches!(err, DetailError::Config { .. }));
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(DetailConfig::load(None).unwrap(), DetailConfig::default());
    }
}
