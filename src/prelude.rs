pub use rayon::prelude::*;

pub use crate::aabb::AABB;
pub use crate::camera::Camera;
pub use crate::geometry::{Aggregate, Plane, Sphere, PLANE_REFLECTIVITY};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::math::{Point3, RGBColor, Ray, Vec3};
pub use crate::renderer::Film;
pub use crate::rgb_to_u32;
pub use crate::world::{
    PointLight, World, HIT_EPSILON, NORMAL_OFFSET, PARALLEL_EPSILON, ROOM_EPSILON, SHADOW_EPSILON,
};

pub use std::f32::consts::PI;
