use super::{MaterialSample, PhongMaterial};
use crate::shapes::GeometryHit;

/// Checkerboard over the world XZ plane: alternating cells keep the base
/// colour or darken it.
#[derive(Debug, Clone)]
pub struct CheckerMaterial {
    pub base: PhongMaterial,
    pub scale: f32,
}

impl CheckerMaterial {
    pub fn new(base: PhongMaterial, scale: f32) -> CheckerMaterial {
        CheckerMaterial { base, scale }
    }

    pub fn sample(&self, hit: &GeometryHit) -> MaterialSample {
        let s = hit.point.x * self.scale;
        let t = hit.point.z * self.scale;

        let col = if (s.floor() as i64 + t.floor() as i64) & 1 == 0 {
            self.base.base_color
        } else {
            self.base.base_color * 0.2
        };

        MaterialSample {
            base_color: col,
            spec_color: self.base.spec_color,
            shininess: self.base.shininess,
            ior: self.base.ior,
            opacity: 1.0,
            reflectivity: self.base.reflectivity,
            emission: self.base.emission,
            normal_noise: self.base.normal_noise.clone(),
        }
    }
}
