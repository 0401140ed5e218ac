//! Phong-style local shading.
//!
//! Sums diffuse and specular contributions over all lights for the nearest
//! hit, or returns the flat sky color when the ray hits nothing. There are
//! no shadow rays: lights reach every hit point, even through geometry.

use glam::Vec3A;

use crate::material::reflect;
use crate::ray::Ray;
use crate::scene::Scene;

/// Flat sky color returned for rays that hit nothing, channels in [0, 255].
pub const BACKGROUND: Vec3A = Vec3A::new(5.0, 100.0, 250.0);

/// Shade one camera ray against the scene.
///
/// Returns an RGB color in the [0, 255] channel range; bright highlights
/// may exceed 255 and are clamped by the renderer when the byte buffer is
/// filled.
pub fn cast_ray(ray: &Ray, scene: &Scene) -> Vec3A {
    let Some(hit) = scene.intersect(ray) else {
        return BACKGROUND;
    };

    let mut diffuse_intensity = 0.0f32;
    let mut specular_intensity = 0.0f32;

    for light in &scene.lights {
        let light_dir = (light.position - hit.point).normalize();

        diffuse_intensity += light.intensity * light_dir.dot(hit.normal).max(0.0);

        // Specular term: mirror the light about the normal and compare
        // against the viewing direction
        let highlight = -reflect(-light_dir, hit.normal).dot(ray.direction);
        specular_intensity +=
            light.intensity * highlight.max(0.0).powf(hit.material.specular_exponent);
    }

    let k = diffuse_intensity * hit.material.albedo[0]
        + specular_intensity * hit.material.albedo[1];
    hit.material.diffuse_color * k
}
