//! Spherecast ray caster
//!
//! Casts one primary ray per pixel from a pinhole camera against a fixed
//! list of spheres and shades hits with a Phong-style local illumination
//! model (diffuse + specular, no shadows or secondary rays). The frame is
//! written out as a binary PPM raster.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod material;
pub mod output;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;
