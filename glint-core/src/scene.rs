use std::path::Path;

use log::warn;

use crate::background::{Background, Skybox};
use crate::camera::Camera;
use crate::light::Light;
use crate::primitive::{Primitive, SurfaceInteraction};
use crate::ray::Ray;
use crate::spectrum::Spectrum;
use crate::{Point3f, Vector3f, T_MIN};

/// Container for everything a render needs: camera, lights, primitives and
/// the background. Built once, then shared read-only across render workers.
#[derive(Debug)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub primitives: Vec<Primitive>,
    pub background: Background,
}

impl Scene {
    pub fn new(camera: Camera) -> Scene {
        Scene {
            camera,
            lights: Vec::new(),
            primitives: Vec::new(),
            background: Background::Gradient,
        }
    }

    pub fn add_primitive(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Use an environment map for escaped rays. A file that cannot be read
    /// degrades to the procedural gradient.
    pub fn set_skybox<P: AsRef<Path>>(&mut self, path: P) {
        match Skybox::load(path.as_ref()) {
            Ok(sky) => self.background = Background::Skybox(sky),
            Err(e) => {
                warn!(
                    "failed to load skybox {}: {}; falling back to gradient sky",
                    path.as_ref().display(),
                    e
                );
                self.background = Background::Gradient;
            }
        }
    }

    /// Closest intersection of `ray` with any primitive, by linear scan.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceInteraction<'_>> {
        let mut closest = f32::INFINITY;
        let mut best = None;
        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray, T_MIN, closest) {
                closest = hit.t();
                best = Some(hit);
            }
        }
        best
    }

    /// Occlusion predicate for shadow rays: is anything closer than
    /// `t_max` along `ray`?
    pub fn intersect_p(&self, ray: &Ray, t_max: f32) -> bool {
        self.primitives
            .iter()
            .any(|p| p.shape.intersect(ray, T_MIN, t_max).is_some())
    }

    /// Radiance for a ray that escaped the scene.
    pub fn background(&self, direction: Vector3f) -> Spectrum {
        self.background.sample(direction)
    }

    /// Normal of the primitive whose centroid lies nearest to `p`. Used by
    /// diagnostic shaders that probe the neighborhood of a point.
    pub fn normal_near(&self, p: Point3f) -> Vector3f {
        self.primitives
            .iter()
            .min_by(|a, b| {
                let da = (p - a.shape.centroid()).length_squared();
                let db = (p - b.shape.centroid()).length_squared();
                da.partial_cmp(&db).unwrap()
            })
            .map(|prim| prim.shape.normal_at(p))
            .unwrap_or_else(|| Vector3f::new(0.0, 1.0, 0.0))
    }

    // Camera conveniences.

    pub fn translate_camera(&mut self, offset: Vector3f) {
        self.camera.translate(offset);
    }

    pub fn zoom_camera(&mut self, factor: f32) {
        self.camera.zoom(factor);
    }

    pub fn look_at(&mut self, target: Point3f) {
        self.camera.look_at(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};
    use crate::material::PhongMaterial;
    use crate::resolution::Resolution;
    use crate::shapes::{Shape, Sphere};

    fn two_sphere_scene() -> Scene {
        let camera = Camera::new(
            Point3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            70.0,
            Resolution::R144P,
        );
        let mut scene = Scene::new(camera);
        scene.add_primitive(Primitive::new(
            Shape::Sphere(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0)),
            PhongMaterial::matte(Spectrum::rgb(1.0, 0.0, 0.0)).into(),
        ));
        scene.add_primitive(Primitive::new(
            Shape::Sphere(Sphere::new(Point3::new(0.0, 0.0, -4.0), 1.0)),
            PhongMaterial::matte(Spectrum::rgb(0.0, 1.0, 0.0)).into(),
        ));
        scene
    }

    #[test]
    fn closest_primitive_wins() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&ray).unwrap();
        assert!((hit.t() - 4.0).abs() < 1e-4);
        assert_eq!(
            hit.sample_material().base_color,
            Spectrum::rgb(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn occlusion_respects_the_distance_cap() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(scene.intersect_p(&ray, 100.0));
        // The nearest surface is 4 units away; a shorter segment is clear.
        assert!(!scene.intersect_p(&ray, 3.0));
    }

    #[test]
    fn empty_scene_sees_background() {
        let scene = Scene::new(Camera::new(
            Point3::origin(),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            70.0,
            Resolution::R144P,
        ));
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        assert!(scene.intersect(&ray).is_none());
        assert!(scene.background(ray.d).b > 0.9);
    }
}
