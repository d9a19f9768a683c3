//! Reflection, refraction and Fresnel terms shared by the integrator and the
//! shading models.

use crate::spectrum::Spectrum;
use crate::{clamp01, Vector3f};

/// Reflect vector `v` about the (unit) normal `n`.
pub fn reflect(v: Vector3f, n: Vector3f) -> Vector3f {
    v - n * (2.0 * v.dot(n))
}

/// Refract vector `v` through a surface with normal `n` using Snell's law.
///
/// `ior_out` is the index of refraction of the medium the ray is leaving and
/// `ior_in` the one it is entering. The incoming vector may point either way
/// relative to `n`; the inside case is detected and handled here. Returns
/// `None` on total internal reflection, otherwise a unit-length direction.
pub fn refract(v: Vector3f, n: Vector3f, ior_out: f32, ior_in: f32) -> Option<Vector3f> {
    let v = v.normalize();
    let mut n = n.normalize();

    let mut eta = ior_out / ior_in;
    let mut cos_i = -n.dot(v);

    if cos_i < 0.0 {
        // ray is inside the medium
        n = -n;
        cos_i = -cos_i;
        eta = 1.0 / eta;
    }

    let sin2_t = eta * eta * (1.0 - cos_i * cos_i).max(0.0);
    if sin2_t >= 1.0 {
        // total internal reflection
        return None;
    }

    let cos_t = (1.0 - sin2_t).max(0.0).sqrt();
    let t = v * eta + n * (eta * cos_i - cos_t);
    Some(t.normalize())
}

/// Schlick's approximation for the Fresnel reflectance.
///
/// `view_dir` points towards the camera; `f0` is the reflectance at normal
/// incidence.
pub fn fresnel_schlick(normal: Vector3f, view_dir: Vector3f, f0: Spectrum) -> Spectrum {
    let n = normal.normalize();
    let v = view_dir.normalize();
    let cos_theta = clamp01(n.dot(v));
    f0 + (Spectrum::white() - f0) * (1.0 - cos_theta).powi(5)
}

/// Base reflectance F0 of a dielectric with the given index of refraction.
pub fn dielectric_f0(ior: f32) -> Spectrum {
    let f0 = ((ior - 1.0) / (ior + 1.0)).powi(2);
    Spectrum::grey(f0)
}
