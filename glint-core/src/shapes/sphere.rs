use std::f32::consts::PI;

use rand::Rng;

use super::GeometryHit;
use crate::ray::Ray;
use crate::{clamp, Point3f, Vector3f};

#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3f, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        if self.radius <= 0.0 {
            return None;
        }
        let oc = ray.o - self.center;

        // Quadratic coefficients; a is 1 for normalized directions.
        let a = ray.d.dot(ray.d);
        let b = 2.0 * oc.dot(ray.d);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_disc = discriminant.sqrt();

        // Prefer the nearer root, falling back to the far one when the
        // origin is inside the sphere.
        let mut root = (-b - sqrt_disc) / (2.0 * a);
        if root <= t_min || root > t_max {
            root = (-b + sqrt_disc) / (2.0 * a);
            if root <= t_min || root > t_max {
                return None;
            }
        }

        let point = ray.at(root);
        let outward = (point - self.center) / self.radius;
        let (u, v) = self.uv_of(outward);

        let mut hit = GeometryHit::new(root, point, outward, ray).with_uv(u, v);
        if let Some((dpdu, dpdv)) = self.tangents_of(outward) {
            hit = hit.with_tangents(dpdu, dpdv);
        }
        Some(hit)
    }

    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        (p - self.center).normalize()
    }

    /// Spherical parameterization of the (unit) outward direction `n`:
    /// `u` wraps azimuth, `v` runs pole to pole from +Y.
    fn uv_of(&self, n: Vector3f) -> (f32, f32) {
        let theta = clamp(n.y, -1.0, 1.0).acos();
        let phi = n.z.atan2(n.x);
        (phi / (2.0 * PI) + 0.5, theta / PI)
    }

    /// Partial derivatives of the parameterization at outward direction `n`.
    /// Degenerate at the poles, where no azimuth direction exists.
    fn tangents_of(&self, n: Vector3f) -> Option<(Vector3f, Vector3f)> {
        let x = n.x * self.radius;
        let y = n.y * self.radius;
        let z = n.z * self.radius;
        let zr = (x * x + z * z).sqrt();
        if zr < 1e-6 {
            return None;
        }
        let cos_phi = x / zr;
        let sin_phi = z / zr;
        let dpdu = Vector3f::new(-z, 0.0, x) * (2.0 * PI);
        let dpdv = Vector3f::new(y * cos_phi, -zr, y * sin_phi) * PI;
        Some((dpdu, dpdv))
    }

    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        let y: f32 = 1.0 - 2.0 * rng.gen::<f32>();
        let phi = 2.0 * PI * rng.gen::<f32>();
        let r = (1.0 - y * y).max(0.0).sqrt();
        self.center + Vector3f::new(r * phi.cos(), y, r * phi.sin()) * self.radius
    }
}
