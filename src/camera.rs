//! Pinhole camera and frame renderer.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading;

/// Pinhole camera fixed at the world origin, looking down -z.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Vertical field of view in degrees (default: 90)
    pub vfov: f32,
}

impl Camera {
    /// Create a camera for the given image dimensions with a 90° field of view.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            vfov: 90.0,
        }
    }

    /// Render the scene into an 8-bit RGB buffer.
    ///
    /// One ray per pixel, no sampling. Every pixel reads only the immutable
    /// scene and writes its own slot, so the loop is parallelized with
    /// rayon; assembly stays row-major regardless of completion order.
    pub fn render(&self, scene: &Scene) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        let mut image: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering frame using {} CPU cores...",
            rayon::current_num_threads()
        );
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.image_width * self.image_height) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let ray = self.primary_ray(i, j);
            let color = shading::cast_ray(&ray, scene);

            // Clamp to the byte range; the float-to-int cast truncates
            *pixel = Rgb([
                color.x.min(255.0) as u8,
                color.y.min(255.0) as u8,
                color.z.min(255.0) as u8,
            ]);
            pb.inc(1);
        });

        pb.finish();
        info!("Frame rendered in {:.2?}", render_start.elapsed());

        image
    }

    /// Build the camera ray through the center of pixel (i, j).
    ///
    /// Maps the pixel onto the z = -1 view plane: x carries the aspect
    /// ratio, y is negated so that increasing rows run down the image.
    fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let half_fov_tan = (self.vfov.to_radians() / 2.0).tan();

        let x = (2.0 * (i as f32 + 0.5) / width - 1.0) * half_fov_tan * width / height;
        let y = -(2.0 * (j as f32 + 0.5) / height - 1.0) * half_fov_tan;

        Ray::new(Vec3A::ZERO, Vec3A::new(x, y, -1.0).normalize())
    }
}
