//! Camera basis construction and per-pixel ray generation.
//!
//! The camera sits at a fixed origin looking at a target point. An
//! orthonormal (forward, right, up) frame is derived once, then each output
//! pixel is mapped through the viewport to a world-space ray direction.

use glam::DVec3;

use crate::ray::Ray;
use crate::vector::{self, DegenerateVectorError, GLOBAL_UP};

/// Precomputed viewport frame mapping pixel coordinates to rays.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: DVec3,
    bottom_left: DVec3,
    step_x: DVec3,
    step_y: DVec3,
}

impl Camera {
    /// Build the camera frame for a raster of `image_width` x `image_height`
    /// device pixels.
    ///
    /// `fov` is the horizontal field of view in radians. Rasters are
    /// expected to be at least 2x2; the viewport mapping divides by
    /// (dimension - 1). Fails when the origin coincides with the target or
    /// the view direction is parallel to [`GLOBAL_UP`]; basis construction
    /// happens once per render, so that failure aborts the whole render
    /// rather than a single pixel.
    pub fn new(
        origin: DVec3,
        target: DVec3,
        fov: f64,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, DegenerateVectorError> {
        let forward = vector::normalized(target - origin)?;
        let right = vector::normalized(GLOBAL_UP.cross(forward))?;
        // Unit length already: forward and right are orthonormal.
        let up = forward.cross(right);

        let aspect = image_height as f64 / image_width as f64;
        let half_width = (fov / 2.0).tan();
        let half_height = half_width * aspect;

        let step_x = right * (2.0 * half_width / (image_width as f64 - 1.0));
        let step_y = up * (2.0 * half_height / (image_height as f64 - 1.0));
        let bottom_left = forward - right * half_width - up * half_height;

        Ok(Self {
            origin,
            bottom_left,
            step_x,
            step_y,
        })
    }

    /// Ray through the center of pixel (x, y).
    ///
    /// The viewport uses one-based pixel centers: pixel (1, 1), not (0, 0),
    /// maps to the bottom-left viewport corner, and pixel (0, 0) lands one
    /// step outside it. This is a fixed convention, not an off-by-one to
    /// correct; see `corner_convention_uses_one_based_offsets`.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let direction = self.bottom_left
            + self.step_x * (x as f64 - 1.0)
            + self.step_y * (y as f64 - 1.0);
        // The forward component of `direction` is always exactly 1, so the
        // vector can never be degenerate.
        Ray::new(self.origin, direction.normalize())
    }
}
