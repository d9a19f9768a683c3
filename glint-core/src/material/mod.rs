//! Surface materials: a uniform Phong-parameter material plus procedural
//! variants that re-evaluate their parameters at every hit point.

use crate::noise::Noise;
use crate::shapes::GeometryHit;
use crate::spectrum::Spectrum;

mod checker;
mod marble;
mod rock;

pub use self::checker::CheckerMaterial;
pub use self::marble::MarbleMaterial;
pub use self::rock::RockMaterial;

/// Fully evaluated material parameters at one hit point.
#[derive(Debug, Clone)]
pub struct MaterialSample {
    pub base_color: Spectrum,
    pub spec_color: Spectrum,
    pub shininess: f32,
    pub ior: f32,
    /// 1 - transparency; glass-like surfaces have opacity < 1.
    pub opacity: f32,
    pub reflectivity: f32,
    pub emission: Spectrum,
    /// Per-hit override of the material's normal perturbation noise.
    pub normal_noise: Option<Noise>,
}

/// The shared parameter block every material variant carries.
#[derive(Debug, Clone)]
pub struct PhongMaterial {
    pub base_color: Spectrum,
    pub spec_color: Spectrum,
    pub shininess: f32,
    /// Fraction of energy sent into the reflected ray, in [0, 1].
    pub reflectivity: f32,
    /// Fraction of energy sent into the transmitted ray, in [0, 1].
    pub transparency: f32,
    pub ior: f32,
    pub emission: Spectrum,
    pub normal_noise: Option<Noise>,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        PhongMaterial {
            base_color: Spectrum::grey(0.78),
            spec_color: Spectrum::white(),
            shininess: 32.0,
            reflectivity: 0.0,
            transparency: 0.0,
            ior: 1.5,
            emission: Spectrum::black(),
            normal_noise: None,
        }
    }
}

impl PhongMaterial {
    /// A diffuse material with the given colour.
    pub fn matte(base_color: Spectrum) -> PhongMaterial {
        PhongMaterial {
            base_color,
            ..PhongMaterial::default()
        }
    }

    /// A perfect mirror.
    pub fn mirror() -> PhongMaterial {
        PhongMaterial {
            base_color: Spectrum::black(),
            reflectivity: 1.0,
            ior: 1.0,
            ..PhongMaterial::default()
        }
    }

    /// A clear dielectric with the given index of refraction.
    pub fn glass(ior: f32) -> PhongMaterial {
        PhongMaterial {
            base_color: Spectrum::black(),
            transparency: 0.95,
            ior,
            ..PhongMaterial::default()
        }
    }

    pub fn with_reflectivity(mut self, reflectivity: f32) -> PhongMaterial {
        self.reflectivity = reflectivity;
        self
    }

    pub fn with_transparency(mut self, transparency: f32) -> PhongMaterial {
        self.transparency = transparency;
        self
    }

    pub fn with_emission(mut self, emission: Spectrum) -> PhongMaterial {
        self.emission = emission;
        self
    }

    pub fn with_normal_noise(mut self, noise: Noise) -> PhongMaterial {
        self.normal_noise = Some(noise);
        self
    }

    fn sample(&self) -> MaterialSample {
        MaterialSample {
            base_color: self.base_color,
            spec_color: self.spec_color,
            shininess: self.shininess,
            ior: self.ior,
            opacity: 1.0 - self.transparency,
            reflectivity: self.reflectivity,
            emission: self.emission,
            normal_noise: self.normal_noise.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Material {
    Phong(PhongMaterial),
    Checker(CheckerMaterial),
    Marble(MarbleMaterial),
    Rock(RockMaterial),
}

impl Material {
    /// The constant parameter block behind the variant.
    pub fn base(&self) -> &PhongMaterial {
        match self {
            Material::Phong(m) => m,
            Material::Checker(m) => &m.base,
            Material::Marble(m) => &m.base,
            Material::Rock(m) => &m.base,
        }
    }

    /// Evaluate the material at a hit point.
    pub fn sample(&self, hit: &GeometryHit) -> MaterialSample {
        match self {
            Material::Phong(m) => m.sample(),
            Material::Checker(m) => m.sample(hit),
            Material::Marble(m) => m.sample(hit),
            Material::Rock(m) => m.sample(hit),
        }
    }

    pub fn reflectance(&self) -> f32 {
        self.base().reflectivity
    }

    pub fn transparency(&self) -> f32 {
        self.base().transparency
    }

    pub fn ior(&self) -> f32 {
        self.base().ior
    }

    pub fn emission(&self) -> Spectrum {
        self.base().emission
    }

    pub fn normal_noise(&self) -> Option<&Noise> {
        self.base().normal_noise.as_ref()
    }
}

impl From<PhongMaterial> for Material {
    fn from(m: PhongMaterial) -> Material {
        Material::Phong(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sample_mirrors_the_parameters() {
        let m = Material::Phong(
            PhongMaterial::matte(Spectrum::rgb(0.2, 0.4, 0.6)).with_reflectivity(0.25),
        );
        let hit = crate::shapes::GeometryHit::new(
            1.0,
            crate::geometry::Point3::origin(),
            crate::geometry::Vector3::new(0.0, 1.0, 0.0),
            &crate::ray::Ray::new(
                crate::geometry::Point3::new(0.0, 1.0, 0.0),
                crate::geometry::Vector3::new(0.0, -1.0, 0.0),
            ),
        );
        let ms = m.sample(&hit);
        assert_eq!(ms.base_color, Spectrum::rgb(0.2, 0.4, 0.6));
        assert_eq!(ms.reflectivity, 0.25);
        assert_eq!(ms.opacity, 1.0);
    }

    #[test]
    fn glass_is_transmissive() {
        let g = Material::Phong(PhongMaterial::glass(1.5));
        assert!(g.transparency() > 0.9);
        assert_eq!(g.ior(), 1.5);
    }
}
