use std::f32::consts::PI;

use rand::Rng;

use super::GeometryHit;
use crate::ray::Ray;
use crate::{lerp, Point3f, Vector3f};

/// A finite open cylinder (no end caps) between two axis end points.
#[derive(Debug, Clone)]
pub struct Cylinder {
    pub base: Point3f,
    pub cap: Point3f,
    pub radius: f32,
}

impl Cylinder {
    pub fn new(base: Point3f, cap: Point3f, radius: f32) -> Cylinder {
        Cylinder { base, cap, radius }
    }

    fn axis(&self) -> (Vector3f, f32) {
        let axis = self.cap - self.base;
        let len = axis.length();
        (axis / len, len)
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        let (axis, axis_len) = self.axis();
        if self.radius <= 0.0 || axis_len <= 0.0 {
            return None;
        }
        let delta = ray.o - self.base;

        // Project ray and origin offset onto the plane orthogonal to the
        // axis and solve the circle intersection there.
        let d = ray.d - axis * ray.d.dot(axis);
        let dp = delta - axis * delta.dot(axis);

        let a = d.dot(d);
        let b = 2.0 * d.dot(dp);
        let c = dp.dot(dp) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }
        let sqrt_disc = discriminant.sqrt();

        // Either root may land outside the finite axial span; try near
        // then far.
        for &root in &[(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)] {
            if root <= t_min || root > t_max {
                continue;
            }
            let point = ray.at(root);
            let proj = (point - self.base).dot(axis);
            if proj < 0.0 || proj > axis_len {
                continue;
            }
            let outward = self.normal_at(point);
            return Some(GeometryHit::new(root, point, outward, ray));
        }

        None
    }

    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        let (axis, _) = self.axis();
        let delta = p - self.base;
        let on_axis = self.base + axis * delta.dot(axis);
        (p - on_axis).normalize()
    }

    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        let (axis, axis_len) = self.axis();
        let (t, b) = crate::geometry::coordinate_system(axis);
        let h = lerp(rng.gen::<f32>(), 0.0, axis_len);
        let phi = 2.0 * PI * rng.gen::<f32>();
        self.base + axis * h + (t * phi.cos() + b * phi.sin()) * self.radius
    }

    pub fn centroid(&self) -> Point3f {
        self.base + (self.cap - self.base) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};
    use approx::assert_relative_eq;

    fn unit_cylinder() -> Cylinder {
        // Vertical, radius 1, from y=0 to y=2.
        Cylinder::new(Point3::origin(), Point3::new(0.0, 2.0, 0.0), 1.0)
    }

    #[test]
    fn hits_the_side() {
        let c = unit_cylinder();
        let r = Ray::new(Point3::new(0.0, 1.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = c.intersect(&r, 1e-3, f32::INFINITY).unwrap();
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-4);
        assert_relative_eq!(hit.normal.z, 1.0, epsilon = 1e-4);
        assert_relative_eq!(hit.normal.dot(Vector3::new(0.0, 1.0, 0.0)), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rejects_hits_beyond_the_caps() {
        let c = unit_cylinder();
        let above = Ray::new(Point3::new(0.0, 3.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(c.intersect(&above, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn near_root_outside_span_falls_back_to_far_root() {
        let c = unit_cylinder();
        // Enters above the cap, descending: the first circle crossing is
        // above y=2 but the second is inside the span.
        let r = Ray::new(Point3::new(0.0, 3.2, 2.0), Vector3::new(0.0, -1.0, -1.0).normalize());
        let hit = c.intersect(&r, 1e-3, f32::INFINITY).unwrap();
        let proj = hit.point.y;
        assert!(proj >= 0.0 && proj <= 2.0);
    }

    #[test]
    fn axial_ray_misses_open_ends() {
        let c = unit_cylinder();
        let r = Ray::new(Point3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(c.intersect(&r, 1e-3, f32::INFINITY).is_none());
    }
}
