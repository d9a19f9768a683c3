use super::{MaterialSample, PhongMaterial};
use crate::noise::{Noise, PerlinNoise};
use crate::shapes::GeometryHit;
use crate::{clamp01, Vector3f};

/// Veined marble: a directional sine field warped by gradient noise, with
/// the vein mask blending a light and a dark tint of the base colour.
#[derive(Debug, Clone)]
pub struct MarbleMaterial {
    pub base: PhongMaterial,
    pub vein_scale: f32,
    pub warp_strength: f32,
    pub vein_sharpness: f32,
    pub warp_noise: Noise,
    pub bump_noise: Option<Noise>,
    pub light_color_factor: f32,
    pub dark_color_factor: f32,
}

impl MarbleMaterial {
    pub fn new(base: PhongMaterial) -> MarbleMaterial {
        MarbleMaterial {
            base,
            vein_scale: 6.0,
            warp_strength: 2.0,
            vein_sharpness: 4.0,
            warp_noise: Noise::Perlin(PerlinNoise::default()),
            bump_noise: None,
            light_color_factor: 1.0,
            dark_color_factor: 0.75,
        }
    }

    pub fn sample(&self, hit: &GeometryHit) -> MaterialSample {
        let p = hit.point;
        let dir = Vector3f::new(1.0, 0.35, 0.15).normalize();
        let u = p.to_vector().dot(dir);
        let w = self.warp_noise.value(p * 1.2);

        let phase =
            u * self.vein_scale + w * self.warp_strength + 0.3 * self.warp_noise.value(p * 3.7);
        let s = 0.5 + 0.5 * phase.sin();
        let vein = clamp01(1.0 - (s - 0.5).abs() * 2.0);
        let veins = vein.powf(self.vein_sharpness);

        let light = self.base.base_color * self.light_color_factor;
        let dark = self.base.base_color * self.dark_color_factor;
        let albedo = dark * (1.0 - veins) + light * veins;

        let shininess = (self.base.shininess * (0.6 + 0.3 * veins)).max(10.0);

        MaterialSample {
            base_color: albedo,
            spec_color: self.base.spec_color,
            shininess,
            ior: self.base.ior,
            opacity: 1.0 - self.base.transparency,
            reflectivity: self.base.reflectivity,
            emission: self.base.emission,
            normal_noise: self.bump_noise.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};
    use crate::ray::Ray;
    use crate::spectrum::Spectrum;

    fn hit_at(x: f32, y: f32, z: f32) -> GeometryHit {
        GeometryHit::new(
            1.0,
            Point3::new(x, y, z),
            Vector3::new(0.0, 1.0, 0.0),
            &Ray::new(Point3::new(x, y + 1.0, z), Vector3::new(0.0, -1.0, 0.0)),
        )
    }

    #[test]
    fn albedo_stays_between_the_two_tints() {
        let m = MarbleMaterial::new(PhongMaterial::matte(Spectrum::grey(0.8)));
        for i in 0..50 {
            let ms = m.sample(&hit_at(i as f32 * 0.11, 0.0, i as f32 * 0.07));
            assert!(ms.base_color.r <= 0.8 + 1e-4);
            assert!(ms.base_color.r >= 0.8 * 0.75 - 1e-4);
            assert!(ms.shininess >= 10.0);
        }
    }

    #[test]
    fn veins_vary_over_space() {
        let m = MarbleMaterial::new(PhongMaterial::matte(Spectrum::grey(0.8)));
        let a = m.sample(&hit_at(0.0, 0.0, 0.0)).base_color.r;
        let mut varied = false;
        for i in 1..40 {
            let b = m.sample(&hit_at(i as f32 * 0.23, 0.0, 0.0)).base_color.r;
            if (a - b).abs() > 1e-3 {
                varied = true;
                break;
            }
        }
        assert!(varied, "marble albedo should vary across the surface");
    }
}
