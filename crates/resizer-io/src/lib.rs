//! resizer-io - Image I/O for the resizer library
//!
//! Decodes image files into [`RasterImage`] values and encodes them back.
//! PNG is the only codec (feature `png-format`, enabled by default); other
//! formats are detected by their signature and rejected with
//! [`IoError::UnsupportedFormat`].
//!
//! # Example
//!
//! ```no_run
//! use resizer_io::{ImageFormat, read_image, write_image};
//!
//! let image = read_image("input.png").unwrap();
//! write_image(&image, "copy.png", ImageFormat::Png).unwrap();
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use resizer_core::ImageFormat;

use log::info;
use resizer_core::RasterImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RasterImage> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let image = read_image_format(BufReader::new(file), format)?;
    info!(
        "Image loaded: {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<RasterImage> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Write an image to a file path.
pub fn write_image<P: AsRef<Path>>(
    image: &RasterImage,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(image, &mut writer, format)?;
    writer.flush()?;
    info!("Image saved: {}", path.display());
    Ok(())
}

/// Encode an image into a new byte buffer.
pub fn write_image_mem(image: &RasterImage, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(image, &mut buffer, format)?;
    Ok(buffer)
}

#[allow(unused_variables)]
fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<RasterImage> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot decode {:?}",
            other
        ))),
    }
}

#[allow(unused_variables)]
fn write_image_format<W: Write>(
    image: &RasterImage,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot encode {:?}",
            other
        ))),
    }
}
