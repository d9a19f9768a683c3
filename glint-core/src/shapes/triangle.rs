use rand::Rng;

use super::GeometryHit;
use crate::ray::Ray;
use crate::{Point3f, Vector3f};

#[derive(Debug, Clone)]
pub struct Triangle {
    pub v0: Point3f,
    pub v1: Point3f,
    pub v2: Point3f,
    // Edges are precomputed; they appear in every intersection test.
    edge1: Vector3f,
    edge2: Vector3f,
}

impl Triangle {
    pub fn new(v0: Point3f, v1: Point3f, v2: Point3f) -> Triangle {
        Triangle {
            v0,
            v1,
            v2,
            edge1: v1 - v0,
            edge2: v2 - v0,
        }
    }

    /// Moeller-Trumbore intersection. Returns the barycentric coordinates as
    /// the hit's UV and the two edges as its tangent basis.
    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        let pvec = ray.d.cross(self.edge2);
        let det = self.edge1.dot(pvec);

        // A near-zero determinant means the ray lies in the triangle plane.
        if det.abs() < 1e-8 {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = ray.o - self.v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(self.edge1);
        let v = ray.d.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.edge2.dot(qvec) * inv_det;
        if t <= t_min || t > t_max {
            return None;
        }

        let outward = self.edge1.cross(self.edge2);
        Some(
            GeometryHit::new(t, ray.at(t), outward, ray)
                .with_uv(u, v)
                .with_tangents(self.edge1, self.edge2),
        )
    }

    pub fn normal_at(&self, _p: Point3f) -> Vector3f {
        self.edge1.cross(self.edge2).normalize()
    }

    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        let mut u: f32 = rng.gen();
        let mut v: f32 = rng.gen();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        self.v0 + self.edge1 * u + self.edge2 * v
    }

    pub fn centroid(&self) -> Point3f {
        self.v0 + (self.edge1 + self.edge2) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};
    use approx::assert_relative_eq;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn barycentric_hit() {
        let tri = unit_triangle();
        let r = Ray::new(Point3::new(0.25, 0.25, 1.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = tri.intersect(&r, 1e-3, f32::INFINITY).unwrap();
        assert_relative_eq!(hit.t, 1.0, epsilon = 1e-5);
        let (u, v) = hit.uv.unwrap();
        assert_relative_eq!(u, 0.25, epsilon = 1e-5);
        assert_relative_eq!(v, 0.25, epsilon = 1e-5);
    }

    #[test]
    fn outside_barycentric_range_misses() {
        let tri = unit_triangle();
        let r = Ray::new(Point3::new(0.75, 0.75, 1.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&r, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn degenerate_triangle_never_hits() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let r = Ray::new(Point3::new(0.5, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&r, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn random_points_stay_inside() {
        use rand::SeedableRng;
        let tri = unit_triangle();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = tri.random_point(&mut rng);
            assert!(p.x >= 0.0 && p.y >= 0.0 && p.x + p.y <= 1.0 + 1e-6);
        }
    }
}
