use super::{render_frame, Renderer};

use crate::config::Config;
use crate::prelude::*;
use crate::tonemap;

use std::sync::Arc;

use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

/// How far one keypress moves the camera or the light, in scene units.
const MOVE_STEP: f32 = 0.3;

/// Interactive renderer: owns the mutable camera/light state, rebuilds an
/// immutable snapshot whenever a key moves something, and re-renders the
/// whole frame from scratch. No validation is performed on the resulting
/// positions; degenerate states just render as background.
pub struct PreviewRenderer {}

impl PreviewRenderer {
    pub fn new() -> Self {
        PreviewRenderer {}
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        PreviewRenderer::new()
    }
}

fn key_deltas(window: &Window, bindings: &[(Key, Vec3)]) -> Vec3 {
    let mut delta = Vec3::ZERO;
    for (key, step) in bindings.iter() {
        if window.is_key_pressed(*key, KeyRepeat::Yes) {
            delta = delta + *step;
        }
    }
    delta
}

impl Renderer for PreviewRenderer {
    fn render(&self, world: World, camera: Camera, config: &Config) {
        let settings = &config.render_settings;
        let (width, height) = (settings.resolution.width, settings.resolution.height);

        let mut window = Window::new(
            "ray traced room (WASDQE move camera, IJKLUO move light, ESC exit)",
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .unwrap_or_else(|e| {
            panic!("{}", e);
        });
        window.set_target_fps(60);

        let camera_bindings = [
            (Key::W, -Vec3::Z * MOVE_STEP),
            (Key::S, Vec3::Z * MOVE_STEP),
            (Key::A, -Vec3::X * MOVE_STEP),
            (Key::D, Vec3::X * MOVE_STEP),
            (Key::Q, Vec3::Y * MOVE_STEP),
            (Key::E, -Vec3::Y * MOVE_STEP),
        ];
        let light_bindings = [
            (Key::I, -Vec3::Z * MOVE_STEP),
            (Key::K, Vec3::Z * MOVE_STEP),
            (Key::J, -Vec3::X * MOVE_STEP),
            (Key::L, Vec3::X * MOVE_STEP),
            (Key::U, Vec3::Y * MOVE_STEP),
            (Key::O, -Vec3::Y * MOVE_STEP),
        ];

        let world = Arc::new(world);
        let mut camera = camera.with_aspect_ratio(width as f32 / height as f32);
        let mut light_position: Point3 = config.light.position.into();
        let mut buffer = vec![0u32; width * height];
        let mut dirty = true;

        while window.is_open() && !window.is_key_down(Key::Escape) {
            let camera_delta = key_deltas(&window, &camera_bindings);
            if camera_delta.norm_squared() > 0.0 {
                camera = camera.translate(camera_delta);
                dirty = true;
            }
            let light_delta = key_deltas(&window, &light_bindings);
            if light_delta.norm_squared() > 0.0 {
                light_position += light_delta;
                dirty = true;
            }

            if dirty {
                let film = render_frame(
                    world.clone(),
                    &camera,
                    PointLight::new(light_position),
                    width,
                    height,
                    settings.max_depth,
                );
                let rgb8 = tonemap::to_rgb8(&film);
                for (out, rgb) in buffer.iter_mut().zip(rgb8.chunks_exact(3)) {
                    *out = rgb_to_u32(rgb[0], rgb[1], rgb[2]);
                }
                info!(
                    "camera at {:?}, light at {:?}",
                    camera.origin, light_position
                );
                dirty = false;
            }

            window.update_with_buffer(&buffer, width, height).unwrap();
        }
    }
}
