use super::{MaterialSample, PhongMaterial};
use crate::noise::{Noise, PerlinNoise};
use crate::shapes::GeometryHit;
use crate::smooth_step;

/// Weathered rock: noise drives a smoothstep mask between the base colour
/// and a darker tint, with rough patches getting a lower shininess.
#[derive(Debug, Clone)]
pub struct RockMaterial {
    pub base: PhongMaterial,
    pub color_noise: Noise,
    pub color_scale: f32,
    pub bump_noise: Option<Noise>,
}

impl RockMaterial {
    pub fn new(base: PhongMaterial) -> RockMaterial {
        RockMaterial {
            base,
            color_noise: Noise::Perlin(PerlinNoise::default()),
            color_scale: 3.0,
            bump_noise: None,
        }
    }

    pub fn sample(&self, hit: &GeometryHit) -> MaterialSample {
        let p = hit.point;

        let t = 0.5 * self.color_noise.value(p * self.color_scale) + 0.5;
        let t = smooth_step(0.35, 0.75, t);

        let dark = self.base.base_color * 0.55;
        let albedo = dark * (1.0 - t) + self.base.base_color * t;

        let shininess = self.base.shininess * (0.6 + 0.8 * (1.0 - t));

        // Without a dedicated bump noise the material's own normal noise
        // doubles as the bump source.
        let normal_noise = self
            .bump_noise
            .clone()
            .or_else(|| self.base.normal_noise.clone());

        MaterialSample {
            base_color: albedo,
            spec_color: self.base.spec_color,
            shininess,
            ior: self.base.ior,
            opacity: 1.0 - self.base.transparency,
            reflectivity: self.base.reflectivity,
            emission: self.base.emission,
            normal_noise,
        }
    }
}
