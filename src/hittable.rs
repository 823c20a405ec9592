use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub color: RGBColor,
    pub reflectivity: f32,
}

impl HitRecord {
    pub fn new(
        time: f32,
        point: Point3,
        normal: Vec3,
        color: RGBColor,
        reflectivity: f32,
    ) -> Self {
        HitRecord {
            time,
            point,
            normal: normal.normalized(),
            color,
            reflectivity,
        }
    }
}

pub trait Hittable {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord>;
}
