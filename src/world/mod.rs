use crate::aabb::AABB;
use crate::geometry::*;
use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

/// Hits closer than this are treated as self-intersections and rejected.
pub const HIT_EPSILON: f32 = 1e-4;
/// A ray is considered parallel to a plane below this |normal . direction|.
pub const PARALLEL_EPSILON: f32 = 1e-6;
/// Tolerance on the room box when clipping plane hits to the finite quad.
pub const ROOM_EPSILON: f32 = 1e-3;
/// Secondary rays (shadow, reflection) start this far along the normal.
pub const NORMAL_OFFSET: f32 = 1e-3;
/// Slack subtracted from the light distance in the shadow test.
pub const SHADOW_EPSILON: f32 = 1e-3;

#[derive(Copy, Clone, Debug)]
pub struct PointLight {
    pub position: Point3,
}

impl PointLight {
    pub fn new(position: Point3) -> PointLight {
        PointLight { position }
    }
}

#[derive(Clone)]
pub struct World {
    pub primitives: Vec<Aggregate>,
    pub background: RGBColor,
    pub bounds: AABB,
}

impl World {
    pub fn new(primitives: Vec<Aggregate>, background: RGBColor, bounds: AABB) -> World {
        World {
            primitives,
            background,
            bounds,
        }
    }

    /// The fixed scene: two spheres in an open-topped 5 x 3 x 5 room.
    pub fn room() -> World {
        let bounds = AABB::new(Point3::ORIGIN, Point3::new(5.0, 3.0, 5.0));
        let mut primitives: Vec<Aggregate> = Vec::new();

        // spheres go first: exact nearest-hit ties resolve to the earliest
        // entry, and spheres win over planes
        let sphere_radius = 0.9;
        primitives.push(Aggregate::from(Sphere::new(
            sphere_radius,
            Point3::new(1.5, sphere_radius, 2.5),
            RGBColor::new(1.0, 0.1, 0.1),
        )));
        primitives.push(Aggregate::from(Sphere::new(
            sphere_radius,
            Point3::new(3.5, sphere_radius, 3.5),
            RGBColor::new(0.1, 0.1, 1.0),
        )));

        // room planes, normals oriented inward. the front (z = 5) has no
        // plane and stays open toward the camera
        let floor_color = RGBColor::new(0.45, 0.30, 0.15);
        primitives.push(Aggregate::from(Plane::new(
            Vec3::Y,
            0.0,
            floor_color,
            bounds,
        )));
        primitives.push(Aggregate::from(Plane::new(
            -Vec3::Y,
            3.0,
            RGBColor::WHITE,
            bounds,
        )));
        primitives.push(Aggregate::from(Plane::new(
            Vec3::Z,
            0.0,
            RGBColor::WHITE,
            bounds,
        )));
        primitives.push(Aggregate::from(Plane::new(
            -Vec3::X,
            5.0,
            RGBColor::WHITE,
            bounds,
        )));
        primitives.push(Aggregate::from(Plane::new(
            Vec3::X,
            0.0,
            RGBColor::WHITE,
            bounds,
        )));

        info!("built room scene with {} primitives", primitives.len());
        World::new(primitives, RGBColor::new(0.2, 0.3, 0.5), bounds)
    }

    /// Nearest hit over every primitive in one scan. The running `t1` bound
    /// shrinks as hits are found, and primitive hit tests compare against it
    /// strictly, so the first primitive reaching the minimum distance wins.
    pub fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = t1;
        for primitive in self.primitives.iter() {
            if let Some(hit) = primitive.hit(r, t0, closest_so_far) {
                closest_so_far = hit.time;
                closest = Some(hit);
            }
        }
        closest
    }
}
