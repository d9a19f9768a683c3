use crate::ray::Ray;
use crate::resolution::Resolution;
use crate::{Point3f, Vector3f};

/// Simple pinhole camera.
///
/// The derived basis and image-plane extents are rebuilt explicitly after
/// every mutation rather than recomputed per ray.
#[derive(Debug, Clone)]
pub struct Camera {
    pub origin: Point3f,
    pub direction: Vector3f,
    pub up_hint: Vector3f,
    /// Vertical field of view, in degrees.
    pub fov: f32,
    pub resolution: Resolution,

    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    half_width: f32,
    half_height: f32,
}

impl Camera {
    pub fn new(
        origin: Point3f,
        direction: Vector3f,
        up_hint: Vector3f,
        fov: f32,
        resolution: Resolution,
    ) -> Camera {
        let mut cam = Camera {
            origin,
            direction,
            up_hint,
            fov,
            resolution,
            forward: Vector3f::zero(),
            right: Vector3f::zero(),
            up: Vector3f::zero(),
            half_width: 0.0,
            half_height: 0.0,
        };
        cam.rebuild();
        cam
    }

    /// A camera at `origin` looking towards `target`.
    pub fn looking_at(origin: Point3f, target: Point3f, fov: f32, resolution: Resolution) -> Camera {
        Camera::new(
            origin,
            (target - origin).normalize(),
            Vector3f::new(0.0, 1.0, 0.0),
            fov,
            resolution,
        )
    }

    /// Recompute the orthonormal basis and image-plane extents.
    pub fn rebuild(&mut self) {
        let fwd = self.direction.normalize();

        // An up hint collinear with the view direction cannot span the
        // image plane; fall back to the X axis.
        self.up_hint = self.up_hint.normalize();
        if fwd.dot(self.up_hint).abs() > 0.999 {
            self.up_hint = Vector3f::new(1.0, 0.0, 0.0);
        }

        let w = -fwd;
        let right = self.up_hint.cross(w).normalize();
        let up = w.cross(right);

        let aspect = self.resolution.aspect_ratio();
        let half_height = (self.fov.to_radians() * 0.5).tan();
        let half_width = aspect * half_height;

        self.forward = fwd;
        self.right = right;
        self.up = up;
        self.half_width = half_width;
        self.half_height = half_height;
    }

    /// Primary ray through normalized image-plane coordinates
    /// `u, v ∈ [-0.5, 0.5]`, with `(-0.5, -0.5)` the bottom-left corner.
    /// The image plane sits one unit in front of the origin.
    pub fn make_ray(&self, u: f32, v: f32) -> Ray {
        let x = u * (2.0 * self.half_width);
        let y = v * (2.0 * self.half_height);
        let plane_center = self.origin + self.forward;
        let pixel = plane_center + self.right * x + self.up * y;
        Ray::new(self.origin, (pixel - self.origin).normalize())
    }

    pub fn translate(&mut self, offset: Vector3f) {
        self.origin += offset;
    }

    /// Scale the field of view; a factor below 1 zooms in.
    pub fn zoom(&mut self, factor: f32) {
        self.fov *= factor;
        self.rebuild();
    }

    /// Rotate the view (and its up hint) around `axis` by `angle_deg`.
    pub fn rotate_around_axis(&mut self, axis: Vector3f, angle_deg: f32) {
        let angle = angle_deg.to_radians();
        self.direction = self.direction.rotate_around_axis(axis, angle).normalize();
        self.up_hint = self.up_hint.rotate_around_axis(axis, angle).normalize();
        self.rebuild();
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
        self.rebuild();
    }

    pub fn look_at(&mut self, target: Point3f) {
        self.direction = (target - self.origin).normalize();
        self.rebuild();
    }

    pub fn forward(&self) -> Vector3f {
        self.forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};
    use approx::assert_relative_eq;

    fn test_camera() -> Camera {
        Camera::new(
            Point3::origin(),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            70.0,
            Resolution::R360P,
        )
    }

    #[test]
    fn center_ray_points_forward() {
        let cam = test_camera();
        let r = cam.make_ray(0.0, 0.0);
        assert_relative_eq!(r.d.dot(cam.forward()), 1.0, epsilon = 1e-5);
        assert_relative_eq!(r.d.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn bottom_left_is_down_and_left() {
        let cam = test_camera();
        let r = cam.make_ray(-0.5, -0.5);
        // Looking down -Z with +Y up: left is -X, down is -Y.
        assert!(r.d.x < 0.0);
        assert!(r.d.y < 0.0);
    }

    #[test]
    fn collinear_up_hint_is_replaced() {
        let cam = Camera::new(
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            60.0,
            Resolution::R360P,
        );
        let r = cam.make_ray(0.3, 0.2);
        assert!(!r.d.has_nan());
        assert_relative_eq!(r.d.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn zooming_in_narrows_the_rays() {
        let mut cam = test_camera();
        let wide = cam.make_ray(0.5, 0.0);
        cam.zoom(0.5);
        let narrow = cam.make_ray(0.5, 0.0);
        assert!(narrow.d.dot(cam.forward()) > wide.d.dot(cam.forward()));
    }

    #[test]
    fn rotation_keeps_the_basis_orthonormal() {
        let mut cam = test_camera();
        cam.rotate_around_axis(Vector3::new(0.0, 1.0, 0.0), 90.0);
        let r = cam.make_ray(0.0, 0.0);
        assert_relative_eq!(r.d.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(r.d.length(), 1.0, epsilon = 1e-5);
    }
}
