//! End-to-end scenarios: small scenes rendered (or probed through the
//! integrator) and checked against physically expected outcomes.

use glint_core::camera::Camera;
use glint_core::geometry::{Point3, Vector3};
use glint_core::integrator::{cast_ray, refraction_ray};
use glint_core::light::Light;
use glint_core::material::{CheckerMaterial, Material, PhongMaterial};
use glint_core::noise::{Noise, NoiseParams, PerlinNoise};
use glint_core::optics::reflect;
use glint_core::primitive::Primitive;
use glint_core::ray::Ray;
use glint_core::renderer::{parallel_render, render, ProgressMode, RenderConfig};
use glint_core::resolution::Resolution;
use glint_core::sampler::SamplePattern;
use glint_core::scene::Scene;
use glint_core::shading::{BlinnPhongShader, NormalShader, Shader};
use glint_core::shapes::{Plane, Quad, Shape, Sphere};
use glint_core::spectrum::Spectrum;

type P3 = Point3<f32>;
type V3 = Vector3<f32>;

fn camera_at(origin: P3, resolution: Resolution) -> Camera {
    Camera::new(
        origin,
        V3::new(0.0, 0.0, -1.0),
        V3::new(0.0, 1.0, 0.0),
        60.0,
        resolution,
    )
}

/// Five-walled box, red on the left, green on the right, with a partly
/// reflective sphere in the middle and a point light under the ceiling.
fn cornell_box(resolution: Resolution) -> Scene {
    let mut scene = Scene::new(camera_at(P3::new(0.0, 0.0, 2.5), resolution));

    let wall = |origin: P3, eu: V3, ev: V3, color: Spectrum| {
        Primitive::new(
            Shape::Quad(Quad::new(origin, eu, ev)),
            PhongMaterial::matte(color).into(),
        )
    };

    let white = Spectrum::grey(0.9);
    // Back, left (red), right (green), floor, ceiling.
    scene.add_primitive(wall(
        P3::new(-1.0, -1.0, -1.0),
        V3::new(2.0, 0.0, 0.0),
        V3::new(0.0, 2.0, 0.0),
        white,
    ));
    scene.add_primitive(wall(
        P3::new(-1.0, -1.0, -1.0),
        V3::new(0.0, 0.0, 2.0),
        V3::new(0.0, 2.0, 0.0),
        Spectrum::rgb(0.9, 0.1, 0.1),
    ));
    scene.add_primitive(wall(
        P3::new(1.0, -1.0, -1.0),
        V3::new(0.0, 0.0, 2.0),
        V3::new(0.0, 2.0, 0.0),
        Spectrum::rgb(0.1, 0.9, 0.1),
    ));
    scene.add_primitive(wall(
        P3::new(-1.0, -1.0, -1.0),
        V3::new(2.0, 0.0, 0.0),
        V3::new(0.0, 0.0, 2.0),
        white,
    ));
    scene.add_primitive(wall(
        P3::new(-1.0, 1.0, -1.0),
        V3::new(2.0, 0.0, 0.0),
        V3::new(0.0, 0.0, 2.0),
        white,
    ));

    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(P3::new(0.0, 0.0, 0.0), 0.5)),
        PhongMaterial::matte(Spectrum::grey(0.9))
            .with_reflectivity(0.3)
            .into(),
    ));

    scene.add_light(Light::point(P3::new(0.0, 0.9, 0.0), 12.0));
    scene.add_light(Light::ambient(0.3));
    scene
}

#[test]
fn cornell_box_center_exposure_and_wall_tint() {
    let resolution = Resolution::new(640, 360);
    let scene = cornell_box(resolution);
    let config = RenderConfig {
        resolution,
        samples_per_pixel: 4,
        max_depth: 3,
        sample_pattern: SamplePattern::Grid2x2,
        progress: ProgressMode::None,
        ..RenderConfig::default()
    };
    let film = parallel_render(&scene, &BlinnPhongShader::default(), &config).unwrap();

    // Exposure at the center of the frame is moderate: neither crushed
    // nor blown out.
    let center = film.pixel(320, 180);
    for c in 0..3 {
        assert!(
            center[c] >= 0.4 && center[c] <= 0.9,
            "center channel {} = {} out of the expected exposure band",
            c,
            center[c]
        );
    }

    // The red wall tints the left side of the sphere through its
    // reflection: red dominates blue there.
    for i in (264..281).step_by(4) {
        let p = film.pixel(i, 180);
        assert!(
            p.r > p.b,
            "pixel {} on the sphere's left half should lean red (got {})",
            i,
            p
        );
    }
}

#[test]
fn shadow_band_is_at_least_twice_as_dark() {
    let mut scene = Scene::new(camera_at(P3::new(0.0, 3.0, 8.0), Resolution::R144P));
    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(P3::new(0.0, 0.0, 0.0), V3::new(0.0, 1.0, 0.0))),
        PhongMaterial::matte(Spectrum::grey(0.8)).into(),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(P3::new(0.0, 1.0, 0.0), 1.0)),
        PhongMaterial::matte(Spectrum::rgb(0.7, 0.4, 0.3)).into(),
    ));
    scene.add_light(Light::point(P3::new(-2.0, 4.0, 0.0), 400.0));
    scene.add_light(Light::ambient(0.08));

    let shader = BlinnPhongShader::default();

    // Straight down onto a floor point behind the sphere (as seen from the
    // light) and onto one in the open.
    let shadowed_ray = Ray::new(P3::new(1.2, 5.0, 0.0), V3::new(0.0, -1.0, 0.0));
    let open_ray = Ray::new(P3::new(4.0, 5.0, 0.0), V3::new(0.0, -1.0, 0.0));

    let shadowed = cast_ray(&shadowed_ray, 3, &shader, &scene).y();
    let open = cast_ray(&open_ray, 3, &shader, &scene).y();

    assert!(
        open >= 2.0 * shadowed,
        "open floor ({}) should be at least twice the shadow band ({})",
        open,
        shadowed
    );
}

#[test]
fn glass_ball_flips_the_image_left_to_right() {
    let mut scene = Scene::new(camera_at(P3::new(0.0, 0.0, 2.0), Resolution::R144P));
    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(P3::new(0.0, 0.0, 0.0), 0.5)),
        Material::from(PhongMaterial::glass(1.5)),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(P3::new(0.0, 0.0, -3.0), V3::new(0.0, 0.0, 1.0))),
        Material::Checker(CheckerMaterial::new(
            PhongMaterial::matte(Spectrum::grey(0.9)),
            2.0,
        )),
    ));
    scene.add_light(Light::ambient(0.3));

    // Follow one ray through the ball by hand: entry refraction, exit
    // refraction, then the background plane.
    let ray = Ray::new(P3::new(0.2, 0.0, 2.0), V3::new(0.0, 0.0, -1.0));

    let entry = scene.intersect(&ray).expect("ray should enter the ball");
    assert!(entry.front_face());
    let n1 = entry.normal();
    let inside = refraction_ray(&ray, &entry, n1, n1, 1.5);

    let exit = scene.intersect(&inside).expect("ray should cross the ball");
    assert!(!exit.front_face());
    let n2 = exit.normal();
    let out = refraction_ray(&inside, &exit, n2, n2, 1.5);

    let backdrop = scene.intersect(&out).expect("ray should reach the plane");
    assert!(
        (backdrop.point().z - -3.0).abs() < 1e-3,
        "refracted ray should land on the checkered plane"
    );
    // The entry offset was +0.2 in x; a solid ball beyond its focal
    // distance inverts the image.
    assert!(
        backdrop.point().x < -0.05,
        "expected a left-right flip, landed at x = {}",
        backdrop.point().x
    );
}

#[test]
fn total_internal_reflection_blocks_the_straight_path() {
    // A bright panel sits where a straight-through ray would exit a glass
    // ball. With matched indices the panel is visible; with glass at 1.5
    // the grazing exit undergoes TIR and the panel stays dark.
    let panel_radiance = |ior: f32| {
        let mut scene = Scene::new(camera_at(P3::new(0.0, 0.0, 3.0), Resolution::R144P));
        let glass = PhongMaterial {
            base_color: Spectrum::black(),
            transparency: 0.95,
            ior,
            ..PhongMaterial::default()
        };
        scene.add_primitive(Primitive::new(
            Shape::Sphere(Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0)),
            glass.into(),
        ));
        scene.add_primitive(Primitive::new(
            Shape::Quad(Quad::new(
                P3::new(-0.1, -1.0, 3.0),
                V3::new(2.0, 0.0, 0.0),
                V3::new(0.0, 2.0, 0.0),
            )),
            Material::from(
                PhongMaterial::matte(Spectrum::black())
                    .with_emission(Spectrum::rgb(1.0, 1.0, 1.0)),
            ),
        ));
        scene.add_light(Light::ambient(0.0));

        // Grazing chord inside the ball: it meets the wall at ~64 degrees,
        // past the 41.8 degree critical angle of glass.
        let ray = Ray::new(P3::new(0.9, 0.0, 0.0), V3::new(0.0, 0.0, 1.0));
        cast_ray(&ray, 2, &BlinnPhongShader::default(), &scene).y()
    };

    let matched = panel_radiance(1.0);
    let glass = panel_radiance(1.5);

    assert!(
        matched > 0.5,
        "with matched indices the panel should be visible (got {})",
        matched
    );
    assert!(
        glass < 0.05,
        "past the critical angle no transmission should reach the panel (got {})",
        glass
    );
}

#[test]
fn pure_mirror_reproduces_the_incident_environment() {
    let mut scene = Scene::new(camera_at(P3::new(0.0, 0.0, 5.0), Resolution::R144P));
    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(P3::new(0.0, 0.0, 0.0), V3::new(0.0, 0.0, 1.0))),
        Material::from(PhongMaterial::mirror()),
    ));
    scene.add_light(Light::ambient(0.0));

    let shader = BlinnPhongShader::default();
    let d = V3::new(0.1, -0.2, -1.0).normalize();
    let ray = Ray::new(P3::new(0.3, 0.4, 5.0), d);

    let seen = cast_ray(&ray, 3, &shader, &scene);
    let expected = scene.background(reflect(d, V3::new(0.0, 0.0, 1.0)).normalize());

    assert!((seen.r - expected.r).abs() < 1e-3);
    assert!((seen.g - expected.g).abs() < 1e-3);
    assert!((seen.b - expected.b).abs() < 1e-3);
}

#[test]
fn noise_bump_shades_rough_but_keeps_the_silhouette() {
    let bumpy = PhongMaterial::matte(Spectrum::grey(0.7)).with_normal_noise(Noise::Perlin(
        PerlinNoise::new(NoiseParams {
            scale: 6.0,
            strength: 0.5,
            ..NoiseParams::default()
        }),
    ));
    let smooth = PhongMaterial::matte(Spectrum::grey(0.7));

    let shading_variation = |material: PhongMaterial| {
        let mut scene = Scene::new(camera_at(P3::new(0.0, 0.0, 3.0), Resolution::R144P));
        scene.add_primitive(Primitive::new(
            Shape::Sphere(Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0)),
            material.into(),
        ));
        scene.add_light(Light::ambient(1.0));

        let shader = NormalShader::default();
        let mut total = 0.0;
        let mut prev: Option<Spectrum> = None;
        for i in 0..60 {
            // Closely spaced hits across the front of the sphere.
            let x = -0.6 + 0.02 * i as f32;
            let ray = Ray::new(P3::new(x, 0.0, 3.0), V3::new(0.0, 0.0, -1.0));
            let hit = scene.intersect(&ray).unwrap();
            let c = shader.shade_multiple_lights(&hit, &scene.lights, -ray.d, &scene);
            if let Some(p) = prev {
                total += (c.r - p.r).abs() + (c.g - p.g).abs() + (c.b - p.b).abs();
            }
            prev = Some(c);
        }
        total
    };

    let rough = shading_variation(bumpy.clone());
    let flat = shading_variation(smooth.clone());
    assert!(
        rough > 2.0 * flat,
        "perturbed normals should vary much faster ({} vs {})",
        rough,
        flat
    );

    // The silhouette is untouched: perturbation changes shading, not
    // geometry, so grazing rays hit or miss identically.
    let bumpy_sphere = Primitive::new(
        Shape::Sphere(Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0)),
        bumpy.into(),
    );
    let smooth_sphere = Primitive::new(
        Shape::Sphere(Sphere::new(P3::new(0.0, 0.0, 0.0), 1.0)),
        smooth.into(),
    );
    for i in 0..100 {
        let x = 0.9 + 0.002 * i as f32;
        let ray = Ray::new(P3::new(x, 0.0, 3.0), V3::new(0.0, 0.0, -1.0));
        let a = bumpy_sphere.intersect(&ray, 1e-3, f32::INFINITY).map(|h| h.t());
        let b = smooth_sphere.intersect(&ray, 1e-3, f32::INFINITY).map(|h| h.t());
        assert_eq!(a, b, "silhouette changed at x = {}", x);
    }
}

#[test]
fn parallel_and_serial_drivers_agree_to_the_byte() {
    let resolution = Resolution::new(64, 36);
    let mut scene = Scene::new(camera_at(P3::new(0.0, 1.0, 6.0), resolution));
    scene.add_primitive(Primitive::new(
        Shape::Plane(Plane::new(P3::new(0.0, 0.0, 0.0), V3::new(0.0, 1.0, 0.0))),
        Material::Checker(CheckerMaterial::new(
            PhongMaterial::matte(Spectrum::grey(0.85)),
            1.0,
        )),
    ));
    scene.add_primitive(Primitive::new(
        Shape::Sphere(Sphere::new(P3::new(0.0, 1.0, 0.0), 1.0)),
        PhongMaterial::matte(Spectrum::rgb(0.6, 0.6, 0.9))
            .with_reflectivity(0.2)
            .into(),
    ));
    scene.add_light(Light::point(P3::new(3.0, 5.0, 2.0), 500.0));
    scene.add_light(Light::ambient(0.1));

    let shader = BlinnPhongShader::default();

    for pattern in &[SamplePattern::Grid2x2, SamplePattern::UniformJitter] {
        let config = RenderConfig {
            resolution,
            samples_per_pixel: 4,
            max_depth: 3,
            sample_pattern: *pattern,
            progress: ProgressMode::None,
            ..RenderConfig::default()
        };
        let serial = render(&scene, &shader, &config).unwrap();
        let parallel = parallel_render(&scene, &shader, &config).unwrap();
        assert_eq!(
            serial.to_rgb8(),
            parallel.to_rgb8(),
            "drivers diverged under {:?}",
            pattern
        );
    }
}
