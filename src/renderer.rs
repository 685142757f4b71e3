//! Top-level render orchestration.
//!
//! Owns the output dimensions and camera parameters, traces one ray per
//! pixel against the scene, shades hits, and writes the result into the
//! output surface. Rows are independent, so they are traced in parallel;
//! the surface itself is written sequentially, exactly once per pixel.

use glam::DVec3;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::intersectable::Scene;
use crate::shader::Shader;
use crate::surface::RenderSurface;
use crate::vector::DegenerateVectorError;

/// Color written for rays that hit nothing.
const BACKGROUND: [u8; 3] = [0, 0, 0];

/// Renders a scene into an output surface, one ray per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Output raster width in device pixels.
    pub image_width: u32,
    /// Output raster height in device pixels.
    pub image_height: u32,
    /// Horizontal field of view in radians (default: 90 degrees).
    pub fov: f64,
    /// Camera position.
    pub origin: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
}

impl Renderer {
    /// Default camera position.
    pub const DEFAULT_ORIGIN: DVec3 = DVec3::new(0.0, 0.0, -10.0);
    /// Default look target.
    pub const DEFAULT_TARGET: DVec3 = DVec3::ZERO;

    /// Create a renderer for a `width` x `height` output scaled by the
    /// device pixel ratio `scale`.
    ///
    /// Both raster dimensions are kept at 2 or more; the viewport mapping
    /// divides by (dimension - 1).
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        Self {
            image_width: ((width as f64 * scale) as u32).max(2),
            image_height: ((height as f64 * scale) as u32).max(2),
            fov: std::f64::consts::FRAC_PI_2,
            origin: Self::DEFAULT_ORIGIN,
            target: Self::DEFAULT_TARGET,
        }
    }

    /// Render the scene into `surface`.
    ///
    /// Every pixel of the raster is overwritten: hits are shaded, misses
    /// get the background color. Repeated calls with identical inputs
    /// produce byte-identical output. The only failure mode is a degenerate
    /// camera basis, which aborts the render before any pixel is written.
    pub fn render(
        &self,
        scene: &Scene,
        shader: &Shader,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), DegenerateVectorError> {
        let camera = Camera::new(
            self.origin,
            self.target,
            self.fov,
            self.image_width,
            self.image_height,
        )?;

        info!(
            "Rendering {}x{} on {} CPU cores...",
            self.image_width,
            self.image_height,
            rayon::current_num_threads()
        );
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        let rows: Vec<Vec<[u8; 3]>> = (0..self.image_height)
            .into_par_iter()
            .map(|y| {
                let row = (0..self.image_width)
                    .map(|x| {
                        let ray = camera.ray_for_pixel(x, y);
                        match scene.closest_intersection(&ray) {
                            Some(hit) => color_to_bytes(shader.shade(&hit)),
                            None => BACKGROUND,
                        }
                    })
                    .collect();
                pb.inc(1);
                row
            })
            .collect();

        for (y, row) in rows.iter().enumerate() {
            for (x, rgb) in row.iter().enumerate() {
                surface.write_rgb(x as u32, y as u32, *rgb);
            }
        }

        pb.finish();
        info!("Image rendered in {:.2?}", render_start.elapsed());
        Ok(())
    }
}

/// Convert a shaded color to output bytes, clamping each channel to
/// [0, 255].
///
/// Shading can legally produce values outside the byte range: negative
/// intensity on back-facing points, or attenuation pushing a channel past
/// 255. Clamping here keeps the output portable instead of wrapping.
fn color_to_bytes(color: DVec3) -> [u8; 3] {
    [
        color.x.clamp(0.0, 255.0) as u8,
        color.y.clamp(0.0, 255.0) as u8,
        color.z.clamp(0.0, 255.0) as u8,
    ]
}
