//! Test fixtures: small source images written into a temporary directory.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Colours used across the integration tests
pub mod colours {
    pub const DARK_RED: [u8; 3] = [10, 20, 30];
    pub const MID_GREY: [u8; 3] = [100, 100, 100];
    pub const LIGHT: [u8; 3] = [200, 210, 220];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// A temporary directory holding source images and the detail output.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a source image where pixel `(x, y)` is `pixels[y][x]`.
    /// The format follows the extension of `name`.
    pub fn write_image(&self, name: &str, pixels: &[&[[u8; 3]]]) -> PathBuf {
        let height = pixels.len() as u32;
        let width = pixels.first().map_or(0, |row| row.len()) as u32;
        let image = RgbImage::from_fn(width, height, |x, y| Rgb(pixels[y as usize][x as usize]));
        let path = self.file(name);
        image.save(&path).expect("write fixture image");
        path
    }

    /// Write a single-colour source image.
    pub fn write_solid(&self, name: &str, width: u32, height: u32, colour: [u8; 3]) -> PathBuf {
        let path = self.file(name);
        RgbImage::from_pixel(width, height, Rgb(colour))
            .save(&path)
            .expect("write fixture image");
        path
    }

    /// Write a YAML config file and return its path.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.file("pixeldetail.yaml");
        std::fs::write(&path, yaml).expect("write config");
        path
    }

    /// Files currently in the workspace, sorted by name.
    pub fn listing(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("read temp dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Canvas dimensions for a `w x h` source with `bw x bh` blocks.
pub fn expected_canvas(w: u32, h: u32, bw: u32, bh: u32) -> (u32, u32) {
    (w * (bw + 1) + 1, h * (bh + 1) + 1)
}

/// The progress lines printed by a successful run, in order.
pub fn progress_lines(input: &str, output: &str, pixels: u64) -> Vec<String> {
    vec![
        format!("Reading image file \"{input}\""),
        format!("Creating new image of {pixels} pixels"),
        "Copying pixels to new image".to_string(),
        "Drawing horizontal separator lines".to_string(),
        "Drawing vertical separator lines".to_string(),
        "Putting RGB values into each pixel box".to_string(),
        format!("Saving new image to file \"{output}\""),
        "Done".to_string(),
    ]
}
