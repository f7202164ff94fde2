//! Heatmap rendering
//!
//! Turns a [`Histogram`] into an RGB [`Image`]: white background, each cell
//! darkened in proportion to its hit count, saturating at `max_level`.
//!
//! ```text
//! level = min(max_level, count)
//! gray  = 255 - floor(255 * level / max_level)
//! ```

pub mod bmp;

use std::path::Path;

use thiserror::Error;

use crate::sampling::Histogram;

/// Errors that can occur while rendering or writing an image
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Image of {width}x{height} needs {size} bytes, more than a BMP header can describe")]
    TooLarge { width: u32, height: u32, size: u64 },

    #[error("max_level must be positive")]
    ZeroMaxLevel,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 8-bit RGB image, row-major, top row first
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Image {
    /// Image of the given size filled with one color
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.offset(x, y)]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let offset = self.offset(x, y);
        self.pixels[offset] = rgb;
    }

    /// Encode as a 24-bit BMP
    ///
    /// # Errors
    /// `RenderError::TooLarge` if the file would exceed [`bmp::MAX_FILE_SIZE`],
    /// `RenderError::EmptyImage` if there are no pixels.
    pub fn to_bmp(&self) -> Result<Vec<u8>, RenderError> {
        let size = bmp::file_size(self.width, self.height);
        if size > bmp::MAX_FILE_SIZE {
            return Err(RenderError::TooLarge {
                width: self.width,
                height: self.height,
                size,
            });
        }
        if self.pixels.is_empty() {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(bmp::to_bytes(self))
    }

    /// Encode as BMP and write to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let bytes = self.to_bmp()?;
        std::fs::write(path.as_ref(), bytes)?;
        log::debug!(
            "Wrote {}x{} bitmap to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Gray value for a cell hit `count` times
pub fn gray_level(count: u32, max_level: u32) -> u8 {
    let level = count.min(max_level);
    let shade = (255 * u64::from(level) / u64::from(max_level)) as u8;
    255 - shade
}

/// Render a histogram as a grayscale heatmap
///
/// # Errors
/// `RenderError::ZeroMaxLevel` if `max_level` is zero.
pub fn render_heatmap(histogram: &Histogram, max_level: u32) -> Result<Image, RenderError> {
    if max_level == 0 {
        return Err(RenderError::ZeroMaxLevel);
    }

    let mut image = Image::filled(histogram.width(), histogram.height(), [255; 3]);
    for (offset, &count) in histogram.counts().iter().enumerate() {
        if count > 0 {
            let gray = gray_level(count, max_level);
            image.pixels[offset] = [gray; 3];
        }
    }

    Ok(image)
}
