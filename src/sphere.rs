//! Sphere primitive.
//!
//! Implements ray-sphere intersection by solving the quadratic
//! |o + t*d - c|² = r² and keeping the nearest root in front of the origin.

use glam::DVec3;

use crate::intersectable::{Intersectable, Intersection};
use crate::ray::Ray;

/// Sphere defined by center and radius, immutable once constructed.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: DVec3,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }
}

impl Intersectable for Sphere {
    fn check_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        // Quadratic coefficients for |o + t*d - c|² = r².
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // t0 <= t1; a tangent ray has t0 == t1 and reports a single hit.
        let sqrt_d = discriminant.sqrt();
        let t0 = (-b - sqrt_d) / (2.0 * a);
        let t1 = (-b + sqrt_d) / (2.0 * a);

        // Nearest root in front of the origin; hits behind it are rejected.
        let distance = if t0 > 0.0 {
            t0
        } else if t1 > 0.0 {
            t1
        } else {
            return None;
        };

        Some(Intersection {
            ray: *ray,
            distance,
            object: self,
        })
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center) / self.radius
    }

    fn origin(&self) -> DVec3 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn unit_z_ray_from(origin: DVec3) -> Ray {
        Ray::new(origin, DVec3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn ray_toward_sphere_hits_the_near_face() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let ray = unit_z_ray_from(DVec3::new(0.0, 0.0, -10.0));

        let hit = sphere.check_intersection(&ray).unwrap();
        // Entry point at t = 7, not the far-side root at t = 13.
        assert!(approx_eq(hit.distance, 7.0, 1e-12));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn tangent_ray_reports_one_hit_at_the_tangent_point() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let ray = unit_z_ray_from(DVec3::new(3.0, 0.0, -10.0));

        let hit = sphere.check_intersection(&ray).unwrap();
        assert!(approx_eq(hit.distance, 10.0, 1e-6));
    }

    #[test]
    fn clean_miss_reports_none() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let ray = unit_z_ray_from(DVec3::new(5.0, 0.0, -10.0));
        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn hits_behind_the_origin_are_rejected() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let ray = unit_z_ray_from(DVec3::new(0.0, 0.0, 5.0));
        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn origin_inside_the_sphere_uses_the_exit_root() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0);
        let ray = unit_z_ray_from(DVec3::ZERO);

        let hit = sphere.check_intersection(&ray).unwrap();
        assert!(approx_eq(hit.distance, 3.0, 1e-12));
    }

    #[test]
    fn normal_points_outward_with_unit_length() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 5.0), 2.0);
        let n = sphere.normal_at(DVec3::new(0.0, 0.0, 3.0));
        assert!(approx_eq((n - DVec3::new(0.0, 0.0, -1.0)).length(), 0.0, 1e-12));
        assert!(approx_eq(n.length(), 1.0, 1e-12));
    }

    #[test]
    fn negative_radius_is_clamped_to_zero() {
        let sphere = Sphere::new(DVec3::ZERO, -4.0);
        assert_eq!(sphere.radius, 0.0);
    }
}
