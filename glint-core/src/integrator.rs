//! The recursive Whitted-style integrator: local shading plus a single
//! reflected or transmitted ray per bounce.

use crate::clamp01;
use crate::optics::{dielectric_f0, fresnel_schlick, reflect, refract};
use crate::primitive::SurfaceInteraction;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::{shading_normal, Shader};
use crate::spectrum::Spectrum;
use crate::Vector3f;

/// Radiance arriving along `ray`, with `depth` bounces remaining.
pub fn cast_ray(ray: &Ray, depth: u32, shader: &dyn Shader, scene: &Scene) -> Spectrum {
    if depth == 0 {
        return Spectrum::black();
    }

    let hit = match scene.intersect(ray) {
        Some(hit) => hit,
        None => return scene.background(ray.d),
    };

    let local = shader
        .shade_multiple_lights(&hit, &scene.lights, -ray.d, scene)
        .clamp01();

    let reflectivity = hit.material.reflectance();
    let transparency = hit.material.transparency();
    if reflectivity <= 0.0 && transparency <= 0.0 {
        return local;
    }

    let n_geom = hit.normal().normalize();
    let ms = hit.sample_material();
    let n_shade = shading_normal(&hit, &ms);

    // One secondary ray per bounce: whichever of reflection and
    // transmission dominates wins.
    if reflectivity >= transparency {
        let next = reflection_ray(ray, &hit, n_geom, n_shade);
        let reflected = cast_ray(&next, depth - 1, shader, scene);

        // The user reflectance is topped up by the Fresnel share of the
        // remaining energy.
        let fresnel = fresnel_schlick(n_shade, -ray.d, dielectric_f0(ms.ior));
        let energy = clamp01(reflectivity + (1.0 - reflectivity) * fresnel.y());

        (local + reflected * energy).clamp01()
    } else {
        let next = refraction_ray(ray, &hit, n_geom, n_shade, ms.ior);
        let transmitted = cast_ray(&next, depth - 1, shader, scene);
        (local + transmitted * transparency).clamp01()
    }
}

/// Secondary-ray origin offset, scaled down for very close hits so the
/// offset never overshoots nearby geometry.
fn bias(t: f32) -> f32 {
    (1e-3 * t.min(1.0)).max(1e-4)
}

/// Ray for the reflected contribution at `hit`. The shading normal steers
/// the bounce; the geometric normal anchors the origin offset.
pub fn reflection_ray(
    ray: &Ray,
    hit: &SurfaceInteraction<'_>,
    n_geom: Vector3f,
    n_shade: Vector3f,
) -> Ray {
    let mut n = n_shade;
    if n.dot(ray.d) > 0.0 {
        n = -n;
    }

    let dir = reflect(ray.d, n).normalize();
    let origin = hit.point() + n_geom * bias(hit.t());
    Ray::new(origin, dir)
}

/// Ray for the transmitted contribution at `hit`. Falls back to a
/// reflection off the surface on total internal reflection.
pub fn refraction_ray(
    ray: &Ray,
    hit: &SurfaceInteraction<'_>,
    n_geom: Vector3f,
    n_shade: Vector3f,
    ior: f32,
) -> Ray {
    let mut n = n_shade.normalize();
    if n.dot(ray.d) > 0.0 {
        n = -n;
    }

    // Entering the medium uses (air, material); leaving it the reverse.
    let (ior_out, ior_in) = if hit.front_face() {
        (1.0, ior)
    } else {
        (ior, 1.0)
    };

    let b = bias(hit.t());
    match refract(ray.d, n, ior_out, ior_in) {
        Some(t_dir) => Ray::new(hit.point() - n_geom * b, t_dir),
        None => {
            let dir = reflect(ray.d, n).normalize();
            Ray::new(hit.point() + n_geom * b, dir)
        }
    }
}
