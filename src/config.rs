use crate::camera::Camera;
use crate::math::Point3;

use std::fs::File;
use std::io::Read;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone)]
pub struct CameraSettings {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    pub vfov: f32,
}

#[derive(Deserialize, Copy, Clone)]
pub struct LightSettings {
    pub position: [f32; 3],
}

#[derive(Deserialize, Copy, Clone)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Preview,
}

#[derive(Deserialize, Clone)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub max_depth: Option<u16>,
    pub threads: Option<u16>,
}

#[derive(Clone)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub max_depth: u16,
    pub threads: u16,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename,
            resolution: data.resolution,
            max_depth: data.max_depth.unwrap_or(2),
            threads: data.threads.unwrap_or(num_cpus::get() as u16),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct TOMLConfig {
    pub renderer: RendererType,
    pub camera: CameraSettings,
    pub light: LightSettings,
    pub render_settings: TOMLRenderSettings,
}

#[derive(Clone)]
pub struct Config {
    pub renderer: RendererType,
    pub camera: CameraSettings,
    pub light: LightSettings,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            renderer: data.renderer,
            camera: data.camera,
            light: data.light,
            render_settings: RenderSettings::from(data.render_settings),
        }
    }
}

pub fn parse_camera_from(settings: &CameraSettings, aspect_ratio: f32) -> Camera {
    Camera::new(
        Point3::from(settings.look_from),
        Point3::from(settings.look_at),
        settings.vfov,
        aspect_ratio,
    )
}

pub fn get_settings(filepath: &str) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(filepath).and_then(|mut f| f.read_to_string(&mut input))?;
    let settings: TOMLConfig = toml::from_str(&input)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_config() {
        let settings: TOMLConfig = match get_settings("data/config.toml") {
            Ok(expr) => expr,
            Err(v) => {
                println!("couldn't read data/config.toml");
                println!("{:?}", v);
                return;
            }
        };
        let config = Config::from(settings);
        assert_eq!(config.render_settings.resolution.width, 800);
        assert_eq!(config.render_settings.resolution.height, 600);
        assert_eq!(config.render_settings.max_depth, 2);
        assert!(config.render_settings.threads > 0);
        assert_eq!(config.camera.look_from, [2.5, 1.5, 8.0]);
        assert_eq!(config.camera.look_at, [2.5, 1.5, 0.0]);
        assert_eq!(config.light.position, [2.5, 3.0, 6.0]);
    }

    #[test]
    fn test_parse_camera() {
        let settings = CameraSettings {
            look_from: [2.5, 1.5, 8.0],
            look_at: [2.5, 1.5, 0.0],
            vfov: 45.0,
        };
        let camera = parse_camera_from(&settings, 800.0 / 600.0);
        assert_eq!(camera.origin, Point3::new(2.5, 1.5, 8.0));
    }
}
