//! Vector algebra for the renderer.
//!
//! All geometry runs on `glam`'s double-precision [`DVec3`]: addition,
//! subtraction, scalar scaling, dot and cross products, and the Euclidean
//! norm come from glam. This module adds the pieces glam does not provide:
//! the world up direction used for camera basis construction, and a
//! normalization that reports degenerate input instead of producing NaNs.

use glam::DVec3;
use thiserror::Error;

/// World-space up direction, used only by camera basis construction.
pub const GLOBAL_UP: DVec3 = DVec3::Y;

/// Error produced when a zero-length (or non-finite) vector is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot normalize a degenerate (zero-length or non-finite) vector")]
pub struct DegenerateVectorError;

/// Normalize `v` to unit length.
///
/// Fails on a zero-length or non-finite input, so a bad vector is caught at
/// the call site instead of propagating invisibly as NaN.
pub fn normalized(v: DVec3) -> Result<DVec3, DegenerateVectorError> {
    v.try_normalize().ok_or(DegenerateVectorError)
}
