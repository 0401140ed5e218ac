//! Phong material description and reflection helper.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Surface material for Phong shading.
///
/// Colors live in the [0, 255] channel range of the output raster; the
/// shader scales them by the accumulated light and the renderer clamps
/// to 255 when filling the byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Base surface color, channels in [0, 255].
    pub diffuse_color: Color,

    /// Weights of the diffuse and specular terms, in that order.
    pub albedo: [f32; 2],

    /// Shininess; larger exponents give tighter highlights.
    pub specular_exponent: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(diffuse_color: Color, albedo: [f32; 2], specular_exponent: f32) -> Self {
        Self {
            diffuse_color,
            albedo,
            specular_exponent,
        }
    }
}

/// Reflect a vector off a surface using the law of reflection.
///
/// `n` must be unit length; `v` need not be.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Vec3A, b: Vec3A) {
        assert!((a - b).length() < EPS, "{:?} != {:?}", a, b);
    }

    #[test]
    fn reflect_head_on_reverses_direction() {
        let n = Vec3A::new(0.0, 0.0, 1.0);
        let v = Vec3A::new(0.0, 0.0, -1.0);
        assert_close(reflect(v, n), Vec3A::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn reflect_is_involutory() {
        let n = Vec3A::new(0.0, 1.0, 0.0);
        let v = Vec3A::new(0.3, -0.8, 0.5);
        assert_close(reflect(reflect(v, n), n), v);
    }

    #[test]
    fn reflect_preserves_tangential_component() {
        let n = Vec3A::new(0.0, 1.0, 0.0);
        let v = Vec3A::new(1.0, -1.0, 0.0);
        assert_close(reflect(v, n), Vec3A::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn normalize_is_idempotent_and_unit() {
        let v = Vec3A::new(1.0, -2.0, 3.0).normalize();
        assert_close(v.normalize(), v);
        assert!((v.length() - 1.0).abs() < EPS);
    }
}
