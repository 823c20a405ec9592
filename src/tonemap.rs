use crate::math::RGBColor;
use crate::renderer::Film;

use std::path::Path;

/// Flatten the film into row-major 8-bit RGB triples, top-left origin.
/// Channels are clamped to [0, 1] before quantization.
pub fn to_rgb8(film: &Film<RGBColor>) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(film.total_pixels() * 3);
    for pixel in film.buffer.iter() {
        let color = pixel.clamp01();
        buffer.push((color.r * 255.0) as u8);
        buffer.push((color.g * 255.0) as u8);
        buffer.push((color.b * 255.0) as u8);
    }
    buffer
}

pub fn write_png(film: &Film<RGBColor>, png_filename: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(png_filename).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut img: image::RgbImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = film.at(x as usize, y as usize).clamp01();
        *pixel = image::Rgb([
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8,
        ]);
    }
    img.save(png_filename)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb8_quantization() {
        let mut film: Film<RGBColor> = Film::new(2, 1, RGBColor::ZERO);
        film.write_at(0, 0, RGBColor::new(1.0, 0.5, 0.0));
        // out-of-range values must clamp, not wrap
        film.write_at(1, 0, RGBColor::new(1.7, -0.3, 0.2));
        let buffer = to_rgb8(&film);
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer[0], 255);
        assert_eq!(buffer[1], 127);
        assert_eq!(buffer[2], 0);
        assert_eq!(buffer[3], 255);
        assert_eq!(buffer[4], 0);
        assert_eq!(buffer[5], 51);
    }
}
