//! Procedural scalar noise fields used to modulate material colour and to
//! perturb shading normals.

use crate::{Point3f, Vector3f};

mod fbm;
mod perlin;
mod ridge;
mod simplex;
mod voronoi;

pub use self::fbm::FbmNoise;
pub use self::perlin::PerlinNoise;
pub use self::ridge::RidgeNoise;
pub use self::simplex::SimplexNoise;
pub use self::voronoi::VoronoiNoise;

/// Parameters shared by every noise variant. `value(p)` samples the raw
/// field at `(p + offset) * scale` and multiplies the result by `strength`;
/// `eps` is the finite-difference step used for normal perturbation.
#[derive(Debug, Clone, Copy)]
pub struct NoiseParams {
    pub scale: f32,
    pub offset: Vector3f,
    pub strength: f32,
    pub eps: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        NoiseParams {
            scale: 1.0,
            offset: Vector3f::zero(),
            strength: 1.0,
            eps: 1e-3,
        }
    }
}

impl NoiseParams {
    pub fn map(&self, p: Point3f) -> Point3f {
        (p + self.offset) * self.scale
    }
}

/// A scalar noise field.
#[derive(Debug, Clone)]
pub enum Noise {
    Perlin(PerlinNoise),
    Fbm(FbmNoise),
    Ridge(RidgeNoise),
    Simplex(SimplexNoise),
    Voronoi(VoronoiNoise),
}

impl Noise {
    pub fn value(&self, p: Point3f) -> f32 {
        match self {
            Noise::Perlin(n) => n.value(p),
            Noise::Fbm(n) => n.value(p),
            Noise::Ridge(n) => n.value(p),
            Noise::Simplex(n) => n.value(p),
            Noise::Voronoi(n) => n.value(p),
        }
    }

    pub fn params(&self) -> &NoiseParams {
        match self {
            Noise::Perlin(n) => &n.params,
            Noise::Fbm(n) => &n.params,
            Noise::Ridge(n) => &n.params,
            Noise::Simplex(n) => &n.params,
            Noise::Voronoi(n) => &n.params,
        }
    }
}

/// Build a tangent basis `(T, B)` around the (unit) normal `n`.
///
/// The helper vector is Y unless the normal is nearly vertical, in which
/// case X keeps the cross product away from degeneracy.
pub fn tangent_basis(n: Vector3f) -> (Vector3f, Vector3f) {
    let up = if n.y.abs() < 0.999 {
        Vector3f::new(0.0, 1.0, 0.0)
    } else {
        Vector3f::new(1.0, 0.0, 0.0)
    };
    let tangent = up.cross(n).normalize();
    let bitangent = n.cross(tangent);
    (tangent, bitangent)
}

/// Tilt the normal `n` at surface point `p` by the local gradient of the
/// noise field, sampled by finite differences along a tangent basis.
pub fn perturb_normal(noise: &Noise, p: Point3f, n: Vector3f) -> Vector3f {
    let eps = noise.params().eps;
    if eps <= 0.0 {
        return n;
    }
    let inv_eps = 1.0 / eps;
    let (tangent, bitangent) = tangent_basis(n);

    let h0 = noise.value(p);
    let ht = noise.value(p + tangent * eps);
    let hb = noise.value(p + bitangent * eps);

    let dht = (ht - h0) * inv_eps;
    let dhb = (hb - h0) * inv_eps;

    (n - tangent * dht - bitangent * dhb).normalize()
}
