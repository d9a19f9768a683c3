use rand::Rng;

use super::GeometryHit;
use crate::ray::Ray;
use crate::{Point3f, Vector3f};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    pub point: Point3f,
    pub normal: Vector3f,
}

impl Plane {
    pub fn new(point: Point3f, normal: Vector3f) -> Plane {
        Plane {
            point,
            normal: normal.normalize(),
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        let denom = ray.d.dot(self.normal);
        if denom.abs() < 1e-6 {
            // Ray is parallel to the plane.
            return None;
        }

        let t = (self.point - ray.o).dot(self.normal) / denom;
        if t <= t_min || t > t_max {
            return None;
        }

        Some(GeometryHit::new(t, ray.at(t), self.normal, ray))
    }

    pub fn normal_at(&self, _p: Point3f) -> Vector3f {
        self.normal
    }

    /// The plane is unbounded, so its anchor stands in for a surface sample.
    pub fn random_point<R: Rng>(&self, _rng: &mut R) -> Point3f {
        self.point
    }
}
