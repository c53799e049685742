//! Synthetic test images

use crate::TestResult;
use resizer_core::{RasterImage, Rgba};

/// Opaque red
pub const RED: Rgba = [255, 0, 0, 255];
/// Opaque green
pub const GREEN: Rgba = [0, 255, 0, 255];
/// Opaque blue
pub const BLUE: Rgba = [0, 0, 255, 255];
/// Opaque white
pub const WHITE: Rgba = [255, 255, 255, 255];

/// Image split into four solid quadrants.
///
/// `colors` is ordered top-left, top-right, bottom-left, bottom-right.
/// With odd sizes the extra row/column goes to the bottom/right quadrants.
pub fn quadrants(width: u32, height: u32, colors: [Rgba; 4]) -> TestResult<RasterImage> {
    let mut image = RasterImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let right = usize::from(x >= width / 2);
            let bottom = usize::from(y >= height / 2);
            image.set_pixel(x, y, colors[bottom * 2 + right])?;
        }
    }
    Ok(image)
}

/// Image where every pixel is distinct for sizes up to 256x256.
///
/// R follows x, G follows y, B mixes both, and alpha is a fixed 255.
pub fn gradient(width: u32, height: u32) -> TestResult<RasterImage> {
    let mut image = RasterImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let px = [
                (x % 256) as u8,
                (y % 256) as u8,
                ((x * 7 + y * 13) % 256) as u8,
                255,
            ];
            image.set_pixel(x, y, px)?;
        }
    }
    Ok(image)
}

/// Image built from an explicit row-major list of pixels.
///
/// # Panics
///
/// Panics if `pixels.len() != width * height`.
pub fn from_pixels(width: u32, height: u32, pixels: &[Rgba]) -> RasterImage {
    assert_eq!(pixels.len(), width as usize * height as usize);
    let data = pixels.iter().flatten().copied().collect();
    RasterImage::from_raw(width, height, data).expect("length checked above")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        let image = quadrants(4, 4, [RED, GREEN, BLUE, WHITE]).unwrap();
        assert_eq!(image.get_pixel(0, 0), Some(RED));
        assert_eq!(image.get_pixel(3, 0), Some(GREEN));
        assert_eq!(image.get_pixel(1, 2), Some(BLUE));
        assert_eq!(image.get_pixel(2, 3), Some(WHITE));
    }

    #[test]
    fn test_gradient_distinct() {
        let image = gradient(8, 8).unwrap();
        assert_ne!(image.get_pixel(1, 0), image.get_pixel(0, 1));
        assert_eq!(image.get_pixel(5, 3), Some([5, 3, 74, 255]));
    }

    #[test]
    fn test_from_pixels() {
        let image = from_pixels(2, 1, &[RED, BLUE]);
        assert_eq!(image.data(), &[255, 0, 0, 255, 0, 0, 255, 255]);
    }
}
