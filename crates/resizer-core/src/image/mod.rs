//! RasterImage - The main image container
//!
//! A `RasterImage` owns a flat 8-bit RGBA buffer plus its width and height.
//!
//! # Pixel layout
//!
//! - Rows are stored top to bottom, pixels left to right
//! - Each pixel is 4 consecutive bytes: R, G, B, A
//! - There is no row padding: row `y` starts at byte `y * width * 4`
//!
//! # Ownership model
//!
//! The buffer is exclusively owned. Its length is checked against
//! `width * height * 4` on construction, and no method can change the
//! length afterwards. A 0x0 image (see [`RasterImage::empty`]) is the
//! "no image" value: constructible, but nothing can be sampled from it.

mod access;
mod compare;

use crate::color::CHANNELS;
use crate::error::{Error, Result};

/// One RGBA pixel.
pub type Rgba = [u8; CHANNELS];

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// BMP format
    Bmp,
    /// GIF format
    Gif,
    /// TIFF format
    Tiff,
    /// WebP format
    WebP,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Tiff => "tif",
            Self::WebP => "webp",
        }
    }
}

/// Owned RGBA raster image
///
/// # Examples
///
/// ```
/// use resizer_core::RasterImage;
///
/// let image = RasterImage::new(640, 480).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// assert_eq!(image.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Create a new image with every byte set to zero.
    ///
    /// A zero width or height is accepted and yields an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height * 4` does not
    /// fit in `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create the 0x0 placeholder image.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an image with every pixel set to `rgba`.
    pub fn new_filled(width: u32, height: u32, rgba: Rgba) -> Result<Self> {
        let len = Self::buffer_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Adopt an existing RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not exactly
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of bytes needed for a `width` x `height` RGBA buffer.
    fn buffer_len(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True for a degenerate image with no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw bytes. The slice length is fixed.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
