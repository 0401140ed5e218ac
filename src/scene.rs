//! Scene description and nearest-hit query.
//!
//! A scene is an ordered list of spheres and point lights, immutable for
//! the duration of a render. The query walks every sphere (no acceleration
//! structure) and keeps the closest hit.

use glam::Vec3A;

use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Distance beyond which an intersection is reported as a miss.
///
/// Separates "no object in the scene" from hits so far away they are
/// effectively at infinity.
pub const MAX_RENDER_DISTANCE: f32 = 1000.0;

/// Point light with position and scalar intensity.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Light position in world coordinates.
    pub position: Vec3A,
    /// Emission strength (non-negative).
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3A, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Ray-scene intersection information.
///
/// Transient result of a successful nearest-hit query, consumed by one
/// shading computation.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the sphere.
    pub point: Vec3A,
    /// Surface normal at the intersection point (unit vector, pointing
    /// away from the sphere center).
    pub normal: Vec3A,
    /// Material of the intersected sphere.
    pub material: Material,
}

/// Static scene: spheres and lights, read-only during rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Spheres in scan order; order is the tie-break for equal hit distances.
    pub spheres: Vec<Sphere>,
    /// Point lights illuminating the scene.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene from sphere and light lists.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// Find the nearest sphere hit along a ray.
    ///
    /// Linear scan over all spheres keeping the smallest hit distance.
    /// The comparison is strict, so equal distances keep the sphere that
    /// comes first in the list. Hits at or beyond [`MAX_RENDER_DISTANCE`]
    /// are reported as misses.
    pub fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        let mut nearest: Option<(f32, &Sphere)> = None;

        for sphere in &self.spheres {
            if let Some(t) = sphere.intersect(r) {
                if nearest.map_or(true, |(best, _)| t < best) {
                    nearest = Some((t, sphere));
                }
            }
        }

        let (t, sphere) = nearest?;
        if t >= MAX_RENDER_DISTANCE {
            return None;
        }

        let point = r.at(t);
        Some(HitRecord {
            point,
            normal: (point - sphere.center).normalize(),
            material: sphere.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(red: f32) -> Material {
        Material::new(Vec3A::new(red, 0.0, 0.0), [0.6, 0.3], 50.0)
    }

    #[test]
    fn empty_scene_reports_no_hit() {
        let scene = Scene::new(Vec::new(), Vec::new());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene.intersect(&r).is_none());
    }

    #[test]
    fn hit_fields_are_point_and_outward_unit_normal() {
        let scene = Scene::new(
            vec![Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 2.0, material(255.0))],
            Vec::new(),
        );
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&r).unwrap();
        assert!((hit.point - Vec3A::new(0.0, 0.0, -3.0)).length() < 1e-5);
        assert!((hit.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-5);
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn nearest_sphere_wins() {
        let scene = Scene::new(
            vec![
                Sphere::new(Vec3A::new(0.0, 0.0, -10.0), 1.0, material(10.0)),
                Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0, material(20.0)),
            ],
            Vec::new(),
        );
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&r).unwrap();
        assert_eq!(hit.material.diffuse_color.x, 20.0);
    }

    #[test]
    fn equal_distances_keep_first_sphere_in_scan_order() {
        // Two coincident spheres; only the materials differ
        let scene = Scene::new(
            vec![
                Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 2.0, material(10.0)),
                Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 2.0, material(20.0)),
            ],
            Vec::new(),
        );
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&r).unwrap();
        assert_eq!(hit.material.diffuse_color.x, 10.0);
    }

    #[test]
    fn hit_beyond_render_distance_is_a_miss() {
        let far = Sphere::new(Vec3A::new(0.0, 0.0, -2000.0), 10.0, material(255.0));
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        // The geometric test itself succeeds, the scene cutoff rejects it
        assert!(far.intersect(&r).is_some());
        let scene = Scene::new(vec![far], Vec::new());
        assert!(scene.intersect(&r).is_none());
    }
}
