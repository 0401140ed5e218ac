//! Binary PPM (P6) output.
//!
//! The header is ASCII (`P6`, width and height, then the maximum channel
//! value 255, newline-separated) and the body is width x height RGB byte
//! triples in row-major order, top row first.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::{ImageBuffer, Rgb};
use log::info;

/// Encode an 8-bit RGB image as binary PPM into a writer.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    image: &ImageBuffer<Rgb<u8>, Vec<u8>>,
) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    // The buffer is already interleaved RGB in row-major order
    writer.write_all(image.as_raw())?;
    Ok(())
}

/// Save an 8-bit RGB image as a binary PPM file.
///
/// Returns an error when the file cannot be created or written; callers
/// treat that as fatal rather than leaving a truncated image behind.
pub fn save_image_as_ppm(
    image: &ImageBuffer<Rgb<u8>, Vec<u8>>,
    output_path: &str,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_ppm(&mut writer, image)?;
    writer.flush()?;
    info!("Image saved as {}", output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::scene::Scene;

    #[test]
    fn header_matches_dimensions() {
        let image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(3, 2);
        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &image).unwrap();
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }

    #[test]
    fn two_by_two_background_render_is_twelve_sky_bytes() {
        let camera = Camera::new(2, 2);
        let image = camera.render(&Scene::new(Vec::new(), Vec::new()));

        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &image).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert!(bytes.starts_with(header));
        let body = &bytes[header.len()..];
        assert_eq!(body, [5u8, 100, 250].repeat(4));
    }
}
