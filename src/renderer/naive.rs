use super::{output_film, Renderer};

use crate::config::Config;
use crate::integrator::WhittedIntegrator;
use crate::prelude::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pbr::ProgressBar;

/// One-shot renderer: traces the whole frame, reports progress, and writes
/// the result to disk.
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        NaiveRenderer::new()
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, camera: Camera, config: &Config) {
        let settings = &config.render_settings;
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        println!("starting render with film resolution {}x{}", width, height);

        let now = Instant::now();

        let camera = camera.with_aspect_ratio(width as f32 / height as f32);
        let integrator = WhittedIntegrator {
            world: Arc::new(world),
            light: PointLight::new(config.light.position.into()),
            max_depth: settings.max_depth,
        };

        let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::ZERO);

        let total_pixels = width * height;
        let mut pb = ProgressBar::new(total_pixels as u64);

        let pixel_count = Arc::new(AtomicUsize::new(0));
        let clone1 = pixel_count.clone();
        let progress_thread = thread::spawn(move || {
            let mut local_index = 0;
            while local_index < total_pixels {
                let pixels_to_increment = clone1.load(Ordering::Relaxed) - local_index;
                pb.add(pixels_to_increment as u64);
                local_index += pixels_to_increment;

                thread::sleep(Duration::from_millis(250));
            }
        });

        let clone2 = pixel_count.clone();
        film.buffer
            .par_iter_mut()
            .enumerate()
            .for_each(|(pixel_index, pixel_ref)| {
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;
                let s = (x as f32 + 0.5) / (width as f32);
                let t = (y as f32 + 0.5) / (height as f32);
                *pixel_ref = integrator.color(camera.get_ray(s, t), 0).clamp01();
                clone2.fetch_add(1, Ordering::Relaxed);
            });

        if let Err(panic) = progress_thread.join() {
            println!("progress bar thread threw an error {:?}", panic);
        }
        println!();
        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        println!("took {}s", elapsed);

        output_film(settings, &film);
    }
}
