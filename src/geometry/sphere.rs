use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub color: RGBColor,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, color: RGBColor) -> Sphere {
        Sphere {
            radius,
            origin,
            color,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        // prefer the near root, fall back to the far one when the near root
        // is behind the origin or inside the epsilon threshold
        let mut time = (-b - discriminant_sqrt) / a;
        if !(time > t0) {
            time = (-b + discriminant_sqrt) / a;
        }
        if time > t0 && time < t1 {
            let point = r.point_at_parameter(time);
            let normal = (point - self.origin) / self.radius;
            return Some(HitRecord::new(time, point, normal, self.color, 0.0));
        }
        None
    }
}
