//! Image export.
//!
//! Saves the rendered surface as a PNG file. The surface already holds
//! final 8-bit channel values, so no tone mapping happens here.

use image::RgbaImage;
use log::{info, warn};

/// Save the rendered surface as a PNG file.
///
/// I/O failures are logged rather than propagated; an unwritable path
/// should not take down a finished render.
pub fn save_png(image: &RgbaImage, output_path: &str) {
    match image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
