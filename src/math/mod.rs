mod point;
mod vec;

pub use point::Point3;
pub use std::f32::consts::PI;
pub use vec::Vec3;

use std::ops::{Add, Mul};

#[derive(Copy, Clone, Debug)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn clamp01(&self) -> RGBColor {
        RGBColor::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_parameter() {
        let r = Ray::new(Point3::ORIGIN, Vec3::X);
        let p = r.point_at_parameter(5.0);
        assert!((p.x - 5.0).abs() < 1e-6);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_clamp01() {
        let c = RGBColor::new(1.4, -0.2, 0.5).clamp01();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
    }
}
