use parking_lot::Mutex;

use crate::material::{Material, MaterialSample};
use crate::ray::Ray;
use crate::shapes::{GeometryHit, Shape};
use crate::{Point3f, Vector3f};

static COUNTER: Mutex<u32> = Mutex::new(0);

fn next_primitive_id() -> u32 {
    let mut counter = COUNTER.lock();
    let id = *counter;
    *counter += 1;
    id
}

/// A renderable object: a shape paired with the material covering it.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
    id: u32,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Primitive {
        Primitive {
            shape,
            material,
            id: next_primitive_id(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceInteraction<'_>> {
        let mut geom = self.shape.intersect(ray, t_min, t_max)?;
        geom.geometry_id = self.id;
        Some(SurfaceInteraction {
            geom,
            material: &self.material,
        })
    }
}

/// A geometric hit together with the material that produced it.
#[derive(Debug, Clone)]
pub struct SurfaceInteraction<'a> {
    pub geom: GeometryHit,
    pub material: &'a Material,
}

impl SurfaceInteraction<'_> {
    pub fn point(&self) -> Point3f {
        self.geom.point
    }

    pub fn normal(&self) -> Vector3f {
        self.geom.normal
    }

    pub fn t(&self) -> f32 {
        self.geom.t
    }

    pub fn front_face(&self) -> bool {
        self.geom.front_face
    }

    pub fn uv(&self) -> Option<(f32, f32)> {
        self.geom.uv
    }

    /// Evaluate the material at this hit.
    pub fn sample_material(&self) -> MaterialSample {
        self.material.sample(&self.geom)
    }
}
