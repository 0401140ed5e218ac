use clap::Parser;
use glam::Vec3A;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spherecast::camera::Camera;
use spherecast::material::Material;
use spherecast::output::save_image_as_ppm;
use spherecast::scene::{Light, Scene};
use spherecast::sphere::Sphere;

/// Output raster width in pixels.
const IMAGE_WIDTH: u32 = 1024;
/// Output raster height in pixels.
const IMAGE_HEIGHT: u32 = 768;

/// Build the fixed demo scene: three spheres and two point lights.
fn create_scene() -> Scene {
    let red = Material::new(Vec3A::new(255.0, 0.0, 0.0), [0.6, 0.3], 50.0);
    let pink = Material::new(Vec3A::new(150.0, 10.0, 150.0), [0.9, 0.5], 50.0);
    let gold = Material::new(Vec3A::new(255.0, 195.0, 0.0), [0.6, 0.4], 50.0);

    let spheres = vec![
        Sphere::new(Vec3A::new(-6.0, 0.0, -16.0), 2.0, gold),
        Sphere::new(Vec3A::new(-1.0, -1.5, -12.0), 3.0, red),
        Sphere::new(Vec3A::new(7.0, 5.0, -18.0), 2.0, pink),
    ];

    let lights = vec![
        Light::new(Vec3A::new(-20.0, 20.0, 20.0), 1.25),
        Light::new(Vec3A::new(0.0, 20.0, 0.0), 1.0),
    ];

    Scene::new(spheres, lights)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("Spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}", IMAGE_WIDTH, IMAGE_HEIGHT);

    let scene = create_scene();
    let camera = Camera::new(IMAGE_WIDTH, IMAGE_HEIGHT);
    let image = camera.render(&scene);

    if let Err(e) = save_image_as_ppm(&image, &args.output) {
        error!("Failed to write {}: {}", args.output, e);
        std::process::exit(1);
    }

    info!("Run success!");
}
