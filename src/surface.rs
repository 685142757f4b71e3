//! Output surface collaborator.
//!
//! The renderer does not own a pixel buffer; it writes RGB bytes into
//! anything implementing [`RenderSurface`]. Channels beyond RGB (alpha) are
//! never touched, so an opaque buffer stays opaque.

use image::{RgbImage, RgbaImage};

/// A raster the renderer writes into, one RGB pixel at a time.
///
/// Implementations must cover at least the raster being rendered; every
/// pixel is written exactly once per render.
pub trait RenderSurface {
    /// Write the RGB bytes of the pixel at (x, y).
    fn write_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]);
}

impl RenderSurface for RgbImage {
    fn write_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, image::Rgb(rgb));
    }
}

impl RenderSurface for RgbaImage {
    fn write_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let pixel = self.get_pixel_mut(x, y);
        pixel.0[0] = rgb[0];
        pixel.0[1] = rgb[1];
        pixel.0[2] = rgb[2];
    }
}
