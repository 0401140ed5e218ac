//! Sphere primitive for ray casting.
//!
//! Implements ray-sphere intersection with the geometric method: project
//! the center onto the ray, then recover the chord endpoints.

use glam::Vec3A;

use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Test the sphere against a ray with unit-length direction.
    ///
    /// Returns the distance along the ray to the nearest intersection in
    /// front of the origin, or `None` when the ray misses or the sphere
    /// lies entirely behind it. Because the direction is unit length the
    /// returned parameter equals physical distance.
    pub fn intersect(&self, r: &Ray) -> Option<f32> {
        // Vector from ray origin to sphere center
        let l = self.center - r.origin;

        // Projection of the center onto the ray and the squared
        // perpendicular distance from center to ray
        let tca = l.dot(r.direction);
        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius * self.radius {
            return None;
        }

        // Half-chord length; the two candidate hit distances straddle tca
        let thc = (self.radius * self.radius - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;

        // Origin inside the sphere: the near root is behind us, take the far one
        if t0 < 0.0 {
            t0 = t1;
        }
        if t0 < 0.0 {
            return None;
        }

        Some(t0)
    }
}
