//! Diffuse point-light shading.
//!
//! Computes a color for an intersection from a single point light with
//! inverse-square falloff. Brightness follows the cosine of the angle
//! between the surface normal and the light direction.

use glam::DVec3;

use crate::intersectable::Intersection;

/// Point light descriptor.
///
/// The light aims at the hit object's reference point, so only position and
/// power are stored here.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Position of the light in world coordinates.
    pub origin: DVec3,
    /// Light power; intensity at distance d falls off as power / d².
    pub power: f64,
}

/// Computes final colors for intersections.
///
/// Holds the immutable shading inputs (base color and light) explicitly
/// instead of rebuilding them per trace.
#[derive(Debug, Clone, Copy)]
pub struct Shader {
    /// Base surface color, in 0-255 channel units.
    pub base_color: DVec3,
    /// The single point light illuminating the scene.
    pub light: Light,
}

impl Shader {
    /// Create a shader from a base color and a light.
    pub fn new(base_color: DVec3, light: Light) -> Self {
        Self { base_color, light }
    }

    /// Compute the color for an intersection.
    ///
    /// Intensity is clamped to at most 1 but deliberately has no lower
    /// bound: points facing away from the light yield negative channel
    /// values, which the surface-write boundary later floors to black.
    pub fn shade(&self, intersection: &Intersection<'_>) -> DVec3 {
        let hit_point = intersection.ray.at(intersection.distance);
        let normal = intersection.object.normal_at(hit_point);

        // The light aims at the object's reference point, so both the
        // falloff distance and the direction are measured against it.
        let target = intersection.object.origin();
        let to_target = target - self.light.origin;
        let distance_squared = to_target.length_squared();
        if distance_squared == 0.0 {
            // Light sitting exactly on the target: nothing sensible to aim
            // at, shade to zero rather than divide by zero.
            return DVec3::ZERO;
        }

        let attenuation = self.light.power / distance_squared;
        let light_dir = to_target / distance_squared.sqrt();
        let intensity = (light_dir.dot(normal) * attenuation).min(1.0);

        self.base_color * intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersectable::Intersectable;
    use crate::ray::Ray;
    use crate::sphere::Sphere;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    const BASE: DVec3 = DVec3::new(244.0, 67.0, 54.0);

    /// Light at the world origin, sphere centered 5 units away: the hit
    /// point on the far side faces the light head-on (cos = 1) and the
    /// inverse-square term is 150 / 25 = 6, so intensity saturates at 1.
    #[test]
    fn point_facing_the_light_saturates_to_the_base_color() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let shader = Shader::new(
            BASE,
            Light {
                origin: DVec3::ZERO,
                power: 150.0,
            },
        );

        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::new(0.0, 0.0, -1.0));
        let hit = sphere.check_intersection(&ray).unwrap();
        assert!(approx_eq(hit.distance, 4.0, 1e-12));

        let color = shader.shade(&hit);
        assert!(approx_eq((color - BASE).length(), 0.0, 1e-9));
    }

    /// The same sphere hit on the side facing away from the light: cos = -1,
    /// and with no lower clamp the shader reports negative channels.
    #[test]
    fn back_facing_point_shades_negative() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let shader = Shader::new(
            BASE,
            Light {
                origin: DVec3::ZERO,
                power: 150.0,
            },
        );

        // Hit the near face at (0, 0, 4), whose normal is (0, 0, -1).
        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::new(0.0, 0.0, -1.0));
        let hit = sphere.check_intersection(&ray).unwrap();
        let near_face = Intersection {
            distance: 6.0,
            ..hit
        };

        let color = shader.shade(&near_face);
        assert!(color.x < 0.0 && color.y < 0.0 && color.z < 0.0);
        // cos = -1 at full inverse-square strength: intensity is -6.
        assert!(approx_eq(color.x, BASE.x * -6.0, 1e-9));
    }

    /// Below saturation the exact inverse-square value must come through.
    #[test]
    fn attenuation_follows_the_inverse_square_law() {
        // Distance 20 from light to center: 150 / 400 = 0.375.
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 20.0), 1.0);
        let shader = Shader::new(
            BASE,
            Light {
                origin: DVec3::ZERO,
                power: 150.0,
            },
        );

        // Entry face at (0, 0, 21): its normal (0, 0, 1) matches the
        // light-to-target direction exactly, so intensity equals the
        // attenuation term alone.
        let ray = Ray::new(DVec3::new(0.0, 0.0, 30.0), DVec3::new(0.0, 0.0, -1.0));
        let hit = sphere.check_intersection(&ray).unwrap();
        assert!(approx_eq(hit.distance, 9.0, 1e-12));

        let color = shader.shade(&hit);
        assert!(approx_eq(color.x, BASE.x * 0.375, 1e-9));
        assert!(approx_eq(color.y, BASE.y * 0.375, 1e-9));
        assert!(approx_eq(color.z, BASE.z * 0.375, 1e-9));
    }

    #[test]
    fn light_on_the_target_shades_to_zero() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let shader = Shader::new(
            BASE,
            Light {
                origin: DVec3::ZERO,
                power: 150.0,
            },
        );

        let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::new(0.0, 0.0, 1.0));
        let hit = sphere.check_intersection(&ray).unwrap();
        let color = shader.shade(&hit);
        assert_eq!(color, DVec3::ZERO);
        assert!(color.is_finite());
    }
}
