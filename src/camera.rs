use crate::math::*;

/// Look-from/look-at pinhole camera. The orthonormal view basis is derived
/// on construction; callers that move the camera build a fresh snapshot.
#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub origin: Point3,
    pub look_at: Point3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_height: f32,
    aspect_ratio: f32,
    vfov: f32,
}

impl Camera {
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        vertical_fov: f32, // vertical_fov should be given in degrees, since it is converted to radians
        aspect_ratio: f32,
    ) -> Camera {
        let forward = (look_at - look_from).normalized();
        let mut right = forward.cross(Vec3::Y).normalized();
        if right * right < 1e-6 {
            // forward is parallel to +y, fall back to +z as the up hint
            right = forward.cross(Vec3::Z).normalized();
        }
        let up = right.cross(forward).normalized();

        let theta: f32 = vertical_fov.to_radians();
        let half_height = (theta / 2.0).tan();

        Camera {
            origin: look_from,
            look_at,
            forward,
            right,
            up,
            half_height,
            aspect_ratio,
            vfov: vertical_fov,
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Ray through film coordinates (s, t) in [0, 1]^2, with (0, 0) at the
    /// top left and (0.5, 0.5) dead center on the forward axis.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let u = (2.0 * s - 1.0) * self.aspect_ratio * self.half_height;
        let v = (1.0 - 2.0 * t) * self.half_height;
        let direction = (self.forward + u * self.right + v * self.up).normalized();
        Ray::new(self.origin, direction)
    }

    /// Move origin and look-at together, keeping the view direction.
    pub fn translate(&self, delta: Vec3) -> Camera {
        Camera::new(
            self.origin + delta,
            self.look_at + delta,
            self.vfov,
            self.aspect_ratio,
        )
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_camera() -> Camera {
        Camera::new(
            Point3::new(2.5, 1.5, 8.0),
            Point3::new(2.5, 1.5, 0.0),
            45.0,
            800.0 / 600.0,
        )
    }

    #[test]
    fn test_center_ray_is_forward() {
        let camera = reference_camera();
        let r = camera.get_ray(0.5, 0.5);
        assert!((r.direction - camera.forward()).norm() < 1e-6);
        assert!((r.direction - (-Vec3::Z)).norm() < 1e-6);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 0.0, -2.0),
            45.0,
            1.0,
        );
        let r = camera.get_ray(0.5, 0.5);
        assert!((camera.forward() * r.direction - 1.0).abs() < 1e-5);
        // off-center rays stay unit length
        let r = camera.get_ray(0.1, 0.9);
        assert!((r.direction.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_up_fallback() {
        // looking straight down, forward is parallel to the primary up hint
        let camera = Camera::new(
            Point3::new(2.5, 5.0, 2.5),
            Point3::new(2.5, 0.0, 2.5),
            45.0,
            1.0,
        );
        let r = camera.get_ray(0.25, 0.75);
        assert!((r.direction.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_at_look_at_yields_zero_rays() {
        // degenerate state is not defended against: rays collapse to zero
        // and silently miss everything
        let camera = Camera::new(
            Point3::new(2.5, 1.5, 8.0),
            Point3::new(2.5, 1.5, 8.0),
            45.0,
            1.0,
        );
        let r = camera.get_ray(0.3, 0.6);
        assert_eq!(r.direction.norm_squared(), 0.0);
    }

    #[test]
    fn test_translate_moves_both_endpoints() {
        let camera = reference_camera().translate(Vec3::new(0.3, 0.0, -0.3));
        assert!((camera.origin.x - 2.8).abs() < 1e-6);
        assert!((camera.look_at.z - (-0.3)).abs() < 1e-6);
        // direction unchanged by a pure translation
        assert!((camera.forward() - (-Vec3::Z)).norm() < 1e-6);
    }
}
