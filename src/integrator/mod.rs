use crate::hittable::HitRecord;
use crate::math::*;
use crate::world::{PointLight, World, HIT_EPSILON, NORMAL_OFFSET, SHADOW_EPSILON};

use std::sync::Arc;

pub const AMBIENT: f32 = 0.2;
pub const DIFFUSE_STRENGTH: f32 = 0.8;
pub const SPECULAR_EXPONENT: f32 = 32.0;
pub const SPECULAR_STRENGTH: f32 = 0.3;

/// Whitted-style tracer: nearest hit, local shading with a hard shadow test,
/// and one mirror bounce per reflective surface up to `max_depth`.
pub struct WhittedIntegrator {
    pub world: Arc<World>,
    pub light: PointLight,
    pub max_depth: u16,
}

impl WhittedIntegrator {
    pub fn color(&self, r: Ray, depth: u16) -> RGBColor {
        let hit = match self.world.hit(r, HIT_EPSILON, f32::INFINITY) {
            Some(hit) => hit,
            None => return self.world.background,
        };

        let view = (-r.direction).normalized();
        let mut color = self.shade(&hit, view);

        if depth < self.max_depth && hit.reflectivity > 0.0 {
            let reflected =
                (r.direction - 2.0 * (r.direction * hit.normal) * hit.normal).normalized();
            let bounce = Ray::new(hit.point + hit.normal * NORMAL_OFFSET, reflected);
            let reflected_color = self.color(bounce, depth + 1);
            color = color * (1.0 - hit.reflectivity) + reflected_color * hit.reflectivity;
        }

        color.clamp01()
    }

    /// Local illumination at a hit point: ambient + Lambertian diffuse,
    /// plus a white Blinn-Phong highlight. Diffuse and specular are zeroed
    /// when the light is occluded; the ambient term always survives.
    fn shade(&self, hit: &HitRecord, view: Vec3) -> RGBColor {
        let to_light = self.light.position - hit.point;
        let light_distance = to_light.norm();
        let l = to_light.normalized();

        let shadow_ray = Ray::new(hit.point + hit.normal * NORMAL_OFFSET, l);
        let occluded = self
            .world
            .hit(shadow_ray, HIT_EPSILON, light_distance - SHADOW_EPSILON)
            .is_some();

        let ndotl = (hit.normal * l).max(0.0);
        let diffuse = if occluded { 0.0 } else { ndotl };
        let mut color = hit.color * (AMBIENT + diffuse * DIFFUSE_STRENGTH);

        let half = (l + view).normalized();
        let ndoth = (hit.normal * half).max(0.0);
        let specular = if occluded {
            0.0
        } else {
            ndoth.powf(SPECULAR_EXPONENT) * SPECULAR_STRENGTH
        };
        color = color + RGBColor::WHITE * specular;

        color.clamp01()
    }
}
