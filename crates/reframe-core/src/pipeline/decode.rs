//! Image decoding with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::BufReader;
use std::path::Path;

use crate::error::{FrameError, FrameResult};

/// Result of decoding an image: pixels plus what we learned about the source.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected source format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Decodes source frames from disk.
pub struct ImageDecoder;

impl ImageDecoder {
    /// Open and decode an image file.
    ///
    /// The format is sniffed from content first and falls back to the
    /// extension, so a misnamed file still decodes.
    pub fn decode(path: &Path) -> FrameResult<DecodedImage> {
        let file = std::fs::File::open(path).map_err(|e| FrameError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {}", e),
        })?;

        let mut reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| FrameError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => ImageFormat::from_path(path).map_err(|_| FrameError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            })?,
        };

        reader.set_format(format);
        let image = reader.decode().map_err(|e| FrameError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_decode_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb_1.0.jpg");
        RgbImage::from_pixel(8, 6, Rgb([10, 20, 30]))
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();

        let decoded = ImageDecoder::decode(&path).unwrap();
        assert_eq!(decoded.format, ImageFormat::Jpeg);
        assert_eq!((decoded.width, decoded.height), (8, 6));
    }

    #[test]
    fn test_format_detected_by_content() {
        // PNG bytes behind a .jpg name
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb_1.0.jpg");
        RgbImage::new(4, 4)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let decoded = ImageDecoder::decode(&path).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb_1.0.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = ImageDecoder::decode(&path).err().unwrap();
        assert!(matches!(err, FrameError::Decode { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_decode_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageDecoder::decode(&dir.path().join("gone.jpg"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Cannot open file"));
    }
}
