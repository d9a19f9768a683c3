use rand::Rng;

use super::GeometryHit;
use crate::ray::Ray;
use crate::{Point3f, Vector3f};

const EPS: f32 = 1e-6;

/// Axis-aligned box given by two opposite corners.
#[derive(Debug, Clone)]
pub struct AxisBox {
    pub min: Point3f,
    pub max: Point3f,
}

impl AxisBox {
    /// The two corners may come in any order; they are sorted per axis.
    pub fn new(corner1: Point3f, corner2: Point3f) -> AxisBox {
        AxisBox {
            min: Point3f::new(
                corner1.x.min(corner2.x),
                corner1.y.min(corner2.y),
                corner1.z.min(corner2.z),
            ),
            max: Point3f::new(
                corner1.x.max(corner2.x),
                corner1.y.max(corner2.y),
                corner1.z.max(corner2.z),
            ),
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        // Rays parallel to an axis miss outright when their origin lies
        // outside that slab.
        for axis in 0..3 {
            if ray.d[axis].abs() < EPS && (ray.o[axis] < self.min[axis] || ray.o[axis] > self.max[axis])
            {
                return None;
            }
        }

        let mut lo = f32::NEG_INFINITY;
        let mut hi = f32::INFINITY;
        for axis in 0..3 {
            let t0 = (self.min[axis] - ray.o[axis]) / ray.d[axis];
            let t1 = (self.max[axis] - ray.o[axis]) / ray.d[axis];
            lo = lo.max(t0.min(t1));
            hi = hi.min(t0.max(t1));
        }

        if hi < lo.max(t_min) || lo > t_max {
            return None;
        }

        let t = if lo >= t_min { lo } else { hi };
        if t > t_max {
            return None;
        }
        let point = ray.at(t);
        let outward = self.normal_at(point);
        let (u, v) = self.uv_of(point, outward);
        let (dpdu, dpdv) = self.tangents_of(outward);

        Some(
            GeometryHit::new(t, point, outward, ray)
                .with_uv(u, v)
                .with_tangents(dpdu, dpdv),
        )
    }

    /// Face normal for a point on the box surface, chosen as the nearest of
    /// the six face planes.
    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        let candidates = [
            ((p.x - self.min.x).abs(), Vector3f::new(-1.0, 0.0, 0.0)),
            ((p.x - self.max.x).abs(), Vector3f::new(1.0, 0.0, 0.0)),
            ((p.y - self.min.y).abs(), Vector3f::new(0.0, -1.0, 0.0)),
            ((p.y - self.max.y).abs(), Vector3f::new(0.0, 1.0, 0.0)),
            ((p.z - self.min.z).abs(), Vector3f::new(0.0, 0.0, -1.0)),
            ((p.z - self.max.z).abs(), Vector3f::new(0.0, 0.0, 1.0)),
        ];
        let mut best = candidates[0];
        for c in &candidates[1..] {
            if c.0 < best.0 {
                best = *c;
            }
        }
        best.1
    }

    /// Per-face UVs: each face carries its own [0,1]^2 chart over the two
    /// axes tangent to it.
    fn uv_of(&self, p: Point3f, normal: Vector3f) -> (f32, f32) {
        let ext = self.max - self.min;
        if normal.x.abs() > 0.5 {
            ((p.z - self.min.z) / ext.z, (p.y - self.min.y) / ext.y)
        } else if normal.y.abs() > 0.5 {
            ((p.x - self.min.x) / ext.x, (p.z - self.min.z) / ext.z)
        } else {
            ((p.x - self.min.x) / ext.x, (p.y - self.min.y) / ext.y)
        }
    }

    fn tangents_of(&self, normal: Vector3f) -> (Vector3f, Vector3f) {
        let ext = self.max - self.min;
        if normal.x.abs() > 0.5 {
            (
                Vector3f::new(0.0, 0.0, ext.z),
                Vector3f::new(0.0, ext.y, 0.0),
            )
        } else if normal.y.abs() > 0.5 {
            (
                Vector3f::new(ext.x, 0.0, 0.0),
                Vector3f::new(0.0, 0.0, ext.z),
            )
        } else {
            (
                Vector3f::new(ext.x, 0.0, 0.0),
                Vector3f::new(0.0, ext.y, 0.0),
            )
        }
    }

    /// Uniform point on the box surface: a face is chosen proportionally to
    /// its area, then a point uniformly on it.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        let ext = self.max - self.min;
        let areas = [ext.y * ext.z, ext.x * ext.z, ext.x * ext.y];
        let total = 2.0 * (areas[0] + areas[1] + areas[2]);
        let mut pick = rng.gen::<f32>() * total;
        let u: f32 = rng.gen();
        let v: f32 = rng.gen();
        for axis in 0..3 {
            for &side in &[0, 1] {
                pick -= areas[axis];
                if pick <= 0.0 {
                    let mut p = self.min;
                    let fixed = if side == 0 { self.min[axis] } else { self.max[axis] };
                    let (a1, a2) = match axis {
                        0 => (1, 2),
                        1 => (0, 2),
                        _ => (0, 1),
                    };
                    let mut coords = [p.x, p.y, p.z];
                    coords[axis] = fixed;
                    coords[a1] = self.min[a1] + u * ext[a1];
                    coords[a2] = self.min[a2] + v * ext[a2];
                    p = Point3f::new(coords[0], coords[1], coords[2]);
                    return p;
                }
            }
        }
        self.centroid()
    }

    pub fn centroid(&self) -> Point3f {
        self.min + (self.max - self.min) * 0.5
    }
}
