//! Analytic primitives and their ray intersections.

use rand::Rng;

use crate::ray::Ray;
use crate::{Point3f, Vector3f};

mod aabox;
mod cylinder;
mod plane;
mod quad;
mod sphere;
mod torus;
mod triangle;

pub use self::aabox::AxisBox;
pub use self::cylinder::Cylinder;
pub use self::plane::Plane;
pub use self::quad::Quad;
pub use self::sphere::Sphere;
pub use self::torus::Torus;
pub use self::triangle::Triangle;

/// Record of a ray-shape intersection.
#[derive(Debug, Clone)]
pub struct GeometryHit {
    /// Ray parameter of the intersection, in `(t_min, t_max]`.
    pub t: f32,
    /// World-space intersection point, `ray.at(t)`.
    pub point: Point3f,
    /// Unit surface normal, flipped to face the incoming ray.
    pub normal: Vector3f,
    /// True when the ray hit the outside of the surface.
    pub front_face: bool,
    /// Surface parameterization in [0, 1]^2 where the shape provides one.
    pub uv: Option<(f32, f32)>,
    /// Tangent basis (dp/du, dp/dv) where the shape provides one.
    pub tangents: Option<(Vector3f, Vector3f)>,
    /// Identifier of the primitive that produced the hit. Filled in by the
    /// owning primitive; carried for shadow-self-exclusion experiments.
    pub geometry_id: u32,
}

impl GeometryHit {
    /// Build a hit from the outward geometric normal, recording sidedness
    /// and orienting the stored normal against the ray.
    pub fn new(t: f32, point: Point3f, outward_normal: Vector3f, ray: &Ray) -> GeometryHit {
        let outward_normal = outward_normal.normalize();
        let front_face = ray.d.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        GeometryHit {
            t,
            point,
            normal,
            front_face,
            uv: None,
            tangents: None,
            geometry_id: 0,
        }
    }

    pub fn with_uv(mut self, u: f32, v: f32) -> GeometryHit {
        self.uv = Some((u, v));
        self
    }

    pub fn with_tangents(mut self, dpdu: Vector3f, dpdv: Vector3f) -> GeometryHit {
        self.tangents = Some((dpdu, dpdv));
        self
    }
}

/// A closed analytic surface.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Quad(Quad),
    Box(AxisBox),
    Cylinder(Cylinder),
    Torus(Torus),
}

impl Shape {
    /// Closest intersection with `ray` in `(t_min, t_max]`, if any.
    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        match self {
            Shape::Sphere(s) => s.intersect(ray, t_min, t_max),
            Shape::Plane(s) => s.intersect(ray, t_min, t_max),
            Shape::Triangle(s) => s.intersect(ray, t_min, t_max),
            Shape::Quad(s) => s.intersect(ray, t_min, t_max),
            Shape::Box(s) => s.intersect(ray, t_min, t_max),
            Shape::Cylinder(s) => s.intersect(ray, t_min, t_max),
            Shape::Torus(s) => s.intersect(ray, t_min, t_max),
        }
    }

    /// Outward normal for a point on (or near) the surface.
    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        match self {
            Shape::Sphere(s) => s.normal_at(p),
            Shape::Plane(s) => s.normal_at(p),
            Shape::Triangle(s) => s.normal_at(p),
            Shape::Quad(s) => s.normal_at(p),
            Shape::Box(s) => s.normal_at(p),
            Shape::Cylinder(s) => s.normal_at(p),
            Shape::Torus(s) => s.normal_at(p),
        }
    }

    /// A point drawn from the surface, used by area lights and tests.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        match self {
            Shape::Sphere(s) => s.random_point(rng),
            Shape::Plane(s) => s.random_point(rng),
            Shape::Triangle(s) => s.random_point(rng),
            Shape::Quad(s) => s.random_point(rng),
            Shape::Box(s) => s.random_point(rng),
            Shape::Cylinder(s) => s.random_point(rng),
            Shape::Torus(s) => s.random_point(rng),
        }
    }

    /// Geometric center of the shape (the anchor point for planes).
    pub fn centroid(&self) -> Point3f {
        match self {
            Shape::Sphere(s) => s.center,
            Shape::Plane(s) => s.point,
            Shape::Triangle(s) => s.centroid(),
            Shape::Quad(s) => s.centroid(),
            Shape::Box(s) => s.centroid(),
            Shape::Cylinder(s) => s.centroid(),
            Shape::Torus(s) => s.center,
        }
    }
}
