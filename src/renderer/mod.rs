mod film;
mod naive;
#[cfg(feature = "preview")]
mod preview;

pub use film::Film;
pub use naive::NaiveRenderer;
#[cfg(feature = "preview")]
pub use preview::PreviewRenderer;

use crate::config::{Config, RenderSettings};
use crate::integrator::WhittedIntegrator;
use crate::prelude::*;
use crate::tonemap;

use std::sync::Arc;

/// Synthesize one complete frame: one ray per pixel through the camera,
/// traced at depth 0. Row 0 of the film is the top of the image. The scene,
/// camera and light are read-only snapshots for the duration of the call.
pub fn render_frame(
    world: Arc<World>,
    camera: &Camera,
    light: PointLight,
    width: usize,
    height: usize,
    max_depth: u16,
) -> Film<RGBColor> {
    let camera = camera.with_aspect_ratio(width as f32 / height as f32);
    let integrator = WhittedIntegrator {
        world,
        light,
        max_depth,
    };

    let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::ZERO);
    film.buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(pixel_index, pixel_ref)| {
            let y: usize = pixel_index / width;
            let x: usize = pixel_index - width * y;
            let s = (x as f32 + 0.5) / (width as f32);
            let t = (y as f32 + 0.5) / (height as f32);
            *pixel_ref = integrator.color(camera.get_ray(s, t), 0).clamp01();
        });
    film
}

pub fn output_film(render_settings: &RenderSettings, film: &Film<RGBColor>) {
    let filename = render_settings.filename.as_ref();
    let filename_str = filename.cloned().unwrap_or_else(|| String::from("room"));
    let png_filename = format!("output/{}.png", filename_str);

    if let Err(inner) = tonemap::write_png(film, &png_filename) {
        error!("failed to write {}", png_filename);
        error!("{:?}", inner.to_string());
    } else {
        info!("wrote {}", png_filename);
    }
}

pub trait Renderer {
    fn render(&self, world: World, camera: Camera, config: &Config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_render_frame_dimensions_and_range() {
        let world = Arc::new(World::room());
        let camera = Camera::new(
            Point3::new(2.5, 1.5, 8.0),
            Point3::new(2.5, 1.5, 0.0),
            45.0,
            1.0,
        );
        let light = PointLight::new(Point3::new(2.5, 3.0, 6.0));
        let film = render_frame(world, &camera, light, 64, 48, 2);
        assert_eq!(film.total_pixels(), 64 * 48);
        for pixel in film.buffer.iter() {
            for channel in [pixel.r, pixel.g, pixel.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_degenerate_camera_renders_background() {
        // camera at its own look-at target: every ray collapses to zero and
        // the frame comes out as flat background
        let world = Arc::new(World::room());
        let background = world.background;
        let camera = Camera::new(
            Point3::new(2.5, 1.5, 8.0),
            Point3::new(2.5, 1.5, 8.0),
            45.0,
            1.0,
        );
        let light = PointLight::new(Point3::new(2.5, 3.0, 6.0));
        let film = render_frame(world, &camera, light, 16, 16, 2);
        for pixel in film.buffer.iter() {
            assert!((pixel.r - background.r).abs() < 1e-6);
            assert!((pixel.g - background.g).abs() < 1e-6);
            assert!((pixel.b - background.b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_light_below_floor_renders() {
        let world = Arc::new(World::room());
        let camera = Camera::new(
            Point3::new(2.5, 1.5, 8.0),
            Point3::new(2.5, 1.5, 0.0),
            45.0,
            1.0,
        );
        let light = PointLight::new(Point3::new(2.5, -1.0, 2.5));
        let film = render_frame(world, &camera, light, 32, 24, 2);
        for pixel in film.buffer.iter() {
            for channel in [pixel.r, pixel.g, pixel.b] {
                assert!(channel.is_finite());
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_sphere_pixels_show_sphere_color() {
        // a ray aimed straight at the red sphere's center must shade from
        // the sphere's base color, with red dominating
        let world = Arc::new(World::room());
        let camera = Camera::new(
            Point3::new(2.5, 1.5, 8.0),
            Point3::new(1.5, 0.9, 2.5),
            45.0,
            1.0,
        );
        let light = PointLight::new(Point3::new(2.5, 3.0, 6.0));
        let film = render_frame(world, &camera, light, 33, 33, 2);
        let center = film.at(16, 16);
        assert!(center.r > center.b);
        assert!(center.r > center.g);
    }
}
