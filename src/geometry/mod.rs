mod plane;
mod sphere;

pub use plane::{Plane, PLANE_REFLECTIVITY};
pub use sphere::Sphere;

use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub enum Aggregate {
    Sphere(Sphere),
    Plane(Plane),
}

impl From<Sphere> for Aggregate {
    fn from(data: Sphere) -> Self {
        Aggregate::Sphere(data)
    }
}

impl From<Plane> for Aggregate {
    fn from(data: Plane) -> Self {
        Aggregate::Plane(data)
    }
}

impl Hittable for Aggregate {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        match self {
            Aggregate::Sphere(sphere) => sphere.hit(r, t0, t1),
            Aggregate::Plane(plane) => plane.hit(r, t0, t1),
        }
    }
}
