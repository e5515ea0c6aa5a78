//! Image export for headless runs.

use std::path::Path;

use log::info;

use crate::buffer::PixelBuffer;
use crate::error::HostError;

/// Save a frame as an 8-bit RGBA PNG.
///
/// The buffer already holds display-ready bytes, so no tone mapping or gamma
/// correction is applied.
pub fn save_png(buffer: &PixelBuffer, output_path: &Path) -> Result<(), HostError> {
    buffer
        .to_image()
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|source| HostError::Image {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!(
        "Frame saved as {} ({}x{})",
        output_path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(())
}
