use crate::aabb::AABB;
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;
use crate::world::{PARALLEL_EPSILON, ROOM_EPSILON};

// walls and floor pick up a faint mirror image of the rest of the room.
// spheres stay at zero, so only planes ever spawn a bounce ray.
pub const PLANE_REFLECTIVITY: f32 = 0.05;

/// An infinite plane `normal . p + offset = 0`, restricted to the finite quad
/// where it meets the room box. The stored normal points into the room.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
    pub color: RGBColor,
    pub bounds: AABB,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f32, color: RGBColor, bounds: AABB) -> Plane {
        Plane {
            normal,
            offset,
            color,
            bounds,
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let denom = self.normal * r.direction;
        if denom.abs() < PARALLEL_EPSILON {
            // parallel ray, will never intersect
            return None;
        }
        let time = -(self.normal * Vec3::from(r.origin) + self.offset) / denom;
        if !(time > t0 && time < t1) {
            return None;
        }
        let point = r.point_at_parameter(time);
        if !self.bounds.contains(point, ROOM_EPSILON) {
            return None;
        }
        // normal is already oriented toward the interior
        Some(HitRecord::new(
            time,
            point,
            self.normal,
            self.color,
            PLANE_REFLECTIVITY,
        ))
    }
}
