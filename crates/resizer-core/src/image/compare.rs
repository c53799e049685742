//! Image comparison

use super::RasterImage;
use crate::color::CHANNELS;
use crate::error::{Error, Result};

impl RasterImage {
    /// Count pixels that differ in any channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the images differ in size.
    pub fn count_pixel_diffs(&self, other: &RasterImage) -> Result<u64> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        let diffs = self
            .data
            .chunks_exact(CHANNELS)
            .zip(other.data.chunks_exact(CHANNELS))
            .filter(|(a, b)| a != b)
            .count();
        Ok(diffs as u64)
    }

    /// True if both images have the same size and identical pixels.
    pub fn equals(&self, other: &RasterImage) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pixel_diffs() {
        let a = RasterImage::new_filled(4, 4, [0, 0, 0, 255]).unwrap();
        let mut b = a.clone();
        assert_eq!(a.count_pixel_diffs(&b).unwrap(), 0);
        assert!(a.equals(&b));

        b.set_pixel(1, 1, [0, 0, 0, 254]).unwrap();
        b.set_pixel(3, 0, [9, 0, 0, 255]).unwrap();
        assert_eq!(a.count_pixel_diffs(&b).unwrap(), 2);
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_count_pixel_diffs_size_mismatch() {
        let a = RasterImage::new(4, 4).unwrap();
        let b = RasterImage::new(4, 5).unwrap();
        assert!(matches!(
            a.count_pixel_diffs(&b),
            Err(Error::IncompatibleSizes(4, 4, 4, 5))
        ));
    }
}
