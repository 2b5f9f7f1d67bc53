//! Re-encoding decoded frames into the output container format.

use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;

use crate::error::{FrameError, FrameResult};
use crate::types::FrameFormat;

/// Encodes frames into a fixed output format.
pub struct FrameEncoder {
    format: FrameFormat,
}

impl FrameEncoder {
    /// Create an encoder for the given output format.
    pub fn new(format: FrameFormat) -> Self {
        Self { format }
    }

    /// Encode an image to bytes.
    ///
    /// Pixels pass through unchanged, except for JPEG output which has no
    /// alpha channel and is flattened to RGB8.
    pub fn encode(&self, image: &DynamicImage, path: &Path) -> FrameResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        let result = match self.format {
            FrameFormat::Jpeg if image.color().has_alpha() || !is_8bit(image) => {
                DynamicImage::ImageRgb8(image.to_rgb8())
                    .write_to(&mut buffer, self.format.image_format())
            }
            _ => image.write_to(&mut buffer, self.format.image_format()),
        };

        result.map_err(|e| FrameError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(buffer.into_inner())
    }

    /// Encode an image and write it to `dest`, replacing any existing file.
    pub fn encode_to_file(&self, image: &DynamicImage, dest: &Path) -> FrameResult<u64> {
        let bytes = self.encode(image, dest)?;
        std::fs::write(dest, &bytes).map_err(|e| FrameError::Write {
            path: dest.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(bytes.len() as u64)
    }
}

fn is_8bit(image: &DynamicImage) -> bool {
    matches!(
        image,
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_)
    )
}
