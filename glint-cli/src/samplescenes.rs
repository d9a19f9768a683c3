//! Built-in demonstration scenes.

use glint_core::camera::Camera;
use glint_core::light::Light;
use glint_core::material::{
    CheckerMaterial, MarbleMaterial, Material, PhongMaterial, RockMaterial,
};
use glint_core::noise::{Noise, NoiseParams, PerlinNoise, RidgeNoise};
use glint_core::primitive::Primitive;
use glint_core::resolution::Resolution;
use glint_core::scene::Scene;
use glint_core::shapes::{AxisBox, Cylinder, Plane, Quad, Shape, Sphere, Torus};
use glint_core::spectrum::Spectrum;
use glint_core::{Point3f, Vector3f};

pub fn by_name(name: &str, resolution: Resolution) -> Scene {
    match name {
        "shadow" => shadow(resolution),
        "glass" => glass(resolution),
        "materials" => materials(resolution),
        _ => cornell(resolution),
    }
}

/// Five matte walls, a partly reflective sphere in the middle, one point
/// light under the ceiling.
pub fn cornell(resolution: Resolution) -> Scene {
    let camera = Camera::new(
        Point3f::new(0.0, 0.0, 2.5),
        Vector3f::new(0.0, 0.0, -1.0),
        Vector3f::new(0.0, 1.0, 0.0),
        60.0,
        resolution,
    );
    let mut scene = Scene::new(camera);

    let white = PhongMaterial::matte(Spectrum::grey(0.9));
    let red = PhongMaterial::matte(Spectrum::rgb(0.9, 0.1, 0.1));
    let green = PhongMaterial::matte(Spectrum::rgb(0.1, 0.9, 0.1));

    let wall = |origin, eu, ev, material: PhongMaterial| {
        Primitive::new(Shape::Quad(Quad::new(origin, eu, ev)), material.into())
    };

    // Back, left (red), right (green), floor, ceiling. The front stays
    // open for the camera.
    scene.add_primitive(wall(
        Point3f::new(-1.0, -1.0, -1.0),
        Vector3f::new(2.0, 0.0, 0.0),
        Vector3f::new(0.0, 2.0, 0.0),
        white.clone(),
    ));
    scene.add_primitive(wall(
        Point3f::new(-1.0, -1.0, -1.0),
        Vector3f::new(0.0, 0.0, 2.0),
        Vector3f::new(0.0, 2.0, 0.0),
        red,
    ));
    scene.add_primitive(wall(
        Point3f::new(1.0, -1.0, -1.0),
        Vector3f::new(0.0, 0.0, 2.0),
        Vector3f::new(0.0, 2.0, 0.0),
        green,
    ));
    scene.add_primitive(wall(
        Point3f::new(-1.0, -1.0, -1.0),
        Vector3f::new(2.0, 0.0, 0.0),
        Vector3f::new(0.0, 0.0, 2.0),
        white.clone(),
    ));
    scene.add_primitive(wall(
        Point3f::new(-1.0, 1.0, -1.0),
        Vector3f::new(2.0, 0.0, 0.0),
        Vector3f::new(0.0, 0.0, 2.0),
        white,
    ));

    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 0.5)),
        PhongMaterial::matte(Spectrum::grey(0.9))
            .with_reflectivity(0.3)
            .into(),
    ));

    scene.add_light(Light::point(Point3f::new(0.0, 0.9, 0.0), 12.0));
    scene.add_light(Light::ambient(0.3));
    scene
}

/// Two spheres over a bright floor plane, lit from above-left so one casts
/// a long shadow band across the other's ground.
pub fn shadow(resolution: Resolution) -> Scene {
    let camera = Camera::looking_at(
        Point3f::new(0.0, 4.0, 8.0),
        Point3f::new(0.5, 0.5, 0.0),
        55.0,
        resolution,
    );
    let mut scene = Scene::new(camera);

    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 1.0, 0.0))),
        PhongMaterial::matte(Spectrum::grey(0.8)).into(),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(0.0, 1.0, 0.0), 1.0)),
        PhongMaterial::matte(Spectrum::rgb(0.8, 0.3, 0.3)).into(),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(2.5, 0.6, 1.0), 0.6)),
        PhongMaterial::matte(Spectrum::rgb(0.3, 0.3, 0.8)).into(),
    ));

    scene.add_light(Light::point(Point3f::new(-2.0, 4.0, 0.0), 400.0));
    scene.add_light(Light::ambient(0.08));
    scene
}

/// A glass ball floating in front of a checkered plane.
pub fn glass(resolution: Resolution) -> Scene {
    let camera = Camera::new(
        Point3f::new(0.0, 0.0, 2.0),
        Vector3f::new(0.0, 0.0, -1.0),
        Vector3f::new(0.0, 1.0, 0.0),
        50.0,
        resolution,
    );
    let mut scene = Scene::new(camera);

    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 0.5)),
        PhongMaterial::glass(1.5).into(),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(
            Point3f::new(0.0, 0.0, -3.0),
            Vector3f::new(0.0, 0.0, 1.0),
        )),
        Material::Checker(CheckerMaterial::new(
            PhongMaterial::matte(Spectrum::grey(0.9)),
            2.0,
        )),
    ));

    scene.add_light(Light::point(Point3f::new(2.0, 3.0, 3.0), 300.0));
    scene.add_light(Light::ambient(0.25));
    scene
}

/// One of each procedural material plus the curvier primitives.
pub fn materials(resolution: Resolution) -> Scene {
    let camera = Camera::looking_at(
        Point3f::new(0.0, 2.5, 7.0),
        Point3f::new(0.0, 0.8, 0.0),
        55.0,
        resolution,
    );
    let mut scene = Scene::new(camera);

    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 1.0, 0.0))),
        Material::Checker(CheckerMaterial::new(
            PhongMaterial::matte(Spectrum::grey(0.85)),
            0.5,
        )),
    ));

    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(-2.4, 1.0, 0.0), 1.0)),
        Material::Marble(MarbleMaterial::new(PhongMaterial::matte(Spectrum::rgb(
            0.85, 0.82, 0.78,
        )))),
    ));

    let mut rock = RockMaterial::new(PhongMaterial::matte(Spectrum::rgb(0.55, 0.5, 0.45)));
    rock.bump_noise = Some(Noise::Ridge(RidgeNoise::new(
        NoiseParams {
            scale: 5.0,
            strength: 0.35,
            ..NoiseParams::default()
        },
        4,
        2.0,
        0.5,
    )));
    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(0.0, 1.0, 0.0), 1.0)),
        Material::Rock(rock),
    ));

    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(Point3f::new(2.4, 1.0, 0.0), 1.0)),
        PhongMaterial::matte(Spectrum::rgb(0.4, 0.5, 0.8))
            .with_normal_noise(Noise::Perlin(PerlinNoise::new(NoiseParams {
                scale: 6.0,
                strength: 0.5,
                ..NoiseParams::default()
            })))
            .into(),
    ));

    scene.add_primitive(Primitive::new(
        Shape::Torus(Torus::new(Point3f::new(-1.4, 0.35, 2.2), 0.9, 0.35)),
        PhongMaterial::matte(Spectrum::rgb(0.8, 0.6, 0.2))
            .with_reflectivity(0.15)
            .into(),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Cylinder(Cylinder::new(
            Point3f::new(1.6, 0.0, 2.4),
            Point3f::new(1.6, 1.2, 2.4),
            0.4,
        )),
        PhongMaterial::matte(Spectrum::rgb(0.3, 0.7, 0.5)).into(),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Box(AxisBox::new(
            Point3f::new(3.4, 0.0, 1.6),
            Point3f::new(4.2, 0.8, 2.4),
        )),
        PhongMaterial::matte(Spectrum::rgb(0.7, 0.4, 0.6)).into(),
    ));

    scene.add_light(Light::point(Point3f::new(3.0, 6.0, 4.0), 900.0));
    scene.add_light(Light::directional(Vector3f::new(-0.4, -1.0, -0.2), 0.15));
    scene.add_light(Light::ambient(0.1));
    scene
}
