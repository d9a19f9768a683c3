use rand::Rng;

use super::{GeometryHit, Triangle};
use crate::ray::Ray;
use crate::{Point3f, Vector3f};

/// A parallelogram spanned by two edges, intersected as two triangles that
/// share a diagonal.
#[derive(Debug, Clone)]
pub struct Quad {
    origin: Point3f,
    edge_u: Vector3f,
    edge_v: Vector3f,
    tri1: Triangle,
    tri2: Triangle,
}

impl Quad {
    pub fn new(origin: Point3f, edge_u: Vector3f, edge_v: Vector3f) -> Quad {
        let far = origin + edge_u + edge_v;
        Quad {
            origin,
            edge_u,
            edge_v,
            tri1: Triangle::new(origin, origin + edge_u, far),
            tri2: Triangle::new(origin, far, origin + edge_v),
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        let hit1 = self.tri1.intersect(ray, t_min, t_max);
        let hit2 = self.tri2.intersect(ray, t_min, t_max);
        match (hit1, hit2) {
            (Some(a), Some(b)) => Some(if a.t < b.t { a } else { b }),
            (a, b) => a.or(b),
        }
    }

    pub fn normal_at(&self, _p: Point3f) -> Vector3f {
        self.edge_u.cross(self.edge_v).normalize()
    }

    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        let u: f32 = rng.gen();
        let v: f32 = rng.gen();
        self.origin + self.edge_u * u + self.edge_v * v
    }

    pub fn centroid(&self) -> Point3f {
        self.origin + (self.edge_u + self.edge_v) * 0.5
    }
}
