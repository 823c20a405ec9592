use crate::math::{Point3, Vec3};

#[derive(Copy, Clone, Debug)]
pub struct AABB {
    pub min: Point3,
    pub max: Point3,
}

impl AABB {
    pub fn new(min: Point3, max: Point3) -> Self {
        AABB {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    // point is only contained if its elements are all within [min, max],
    // widened by the tolerance on every axis
    pub fn contains(&self, point: Point3, tolerance: f32) -> bool {
        point.x >= self.min.x - tolerance
            && point.x <= self.max.x + tolerance
            && point.y >= self.min.y - tolerance
            && point.y <= self.max.y + tolerance
            && point.z >= self.min.z - tolerance
            && point.z <= self.max.z + tolerance
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Point3 {
        self.min + (self.size() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let aabb = AABB::new(Point3::ORIGIN, Point3::new(5.0, 3.0, 5.0));
        assert!(aabb.contains(Point3::new(2.5, 1.5, 2.5), 0.0));
        assert!(!aabb.contains(Point3::new(5.5, 1.5, 2.5), 0.0));
        // just outside, but within tolerance
        assert!(aabb.contains(Point3::new(5.0005, 1.5, 2.5), 1e-3));
        assert!(aabb.contains(Point3::new(-0.0005, 1.5, 2.5), 1e-3));
    }

    #[test]
    fn test_min_max_swap() {
        let aabb = AABB::new(Point3::new(5.0, 3.0, 5.0), Point3::ORIGIN);
        assert_eq!(aabb.min, Point3::ORIGIN);
        assert_eq!(aabb.max, Point3::new(5.0, 3.0, 5.0));
        assert_eq!(aabb.center(), Point3::new(2.5, 1.5, 2.5));
    }
}
