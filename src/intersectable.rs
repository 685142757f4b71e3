//! Ray-object intersection contract.
//!
//! Defines the [`Intersectable`] capability implemented by renderable
//! shapes, the [`Intersection`] record produced on a hit, and the [`Scene`]
//! object list that is scanned for the closest hit.

use glam::DVec3;

use crate::ray::Ray;

/// Record of a ray striking a surface.
///
/// `distance` is the ray parameter t of the hit point, so
/// `ray.at(distance)` recovers the point itself. Implementations only
/// produce hits in front of the ray origin (`distance > 0`).
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// The ray that produced this hit.
    pub ray: Ray,
    /// Parametric distance along the ray to the hit point.
    pub distance: f64,
    /// The shape that was hit.
    ///
    /// A non-owning back-reference into the scene, used at shading time to
    /// query the surface normal and the shape's reference point.
    pub object: &'a dyn Intersectable,
}

/// Capability contract for shapes a ray can strike.
///
/// Implementations never mutate themselves or the ray. `Sync + Send` is
/// required so scenes can be traced from parallel workers.
pub trait Intersectable: Sync + Send {
    /// Test the ray against this shape.
    ///
    /// Returns the closest hit in front of the ray origin, or `None` when
    /// the ray misses. A miss is a normal outcome, not an error.
    fn check_intersection(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Outward unit normal at a point on the shape's surface.
    fn normal_at(&self, point: DVec3) -> DVec3;

    /// Reference point of the shape, used as the light target when shading.
    fn origin(&self) -> DVec3;
}

/// Immutable list of shapes forming a scene.
///
/// Uses a linear scan for intersection testing; shapes are polymorphic
/// through `Box<dyn Intersectable>`.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Intersectable>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape to the scene.
    pub fn add(&mut self, object: Box<dyn Intersectable>) {
        self.objects.push(object);
    }

    /// Find the closest intersection of `ray` with any shape in the scene.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;

        for object in &self.objects {
            if let Some(hit) = object.check_intersection(ray) {
                match closest {
                    Some(ref best) if best.distance <= hit.distance => {}
                    _ => closest = Some(hit),
                }
            }
        }

        closest
    }
}
