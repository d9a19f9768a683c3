use super::{shading_normal, shadow_trace, Shader};
use crate::light::Light;
use crate::material::MaterialSample;
use crate::optics::{dielectric_f0, fresnel_schlick};
use crate::primitive::SurfaceInteraction;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::Vector3f;

/// Blinn-Phong with optional Fresnel for dielectrics. Handles multiple
/// lights, ambient terms, shadows and emission.
#[derive(Debug, Clone)]
pub struct BlinnPhongShader {
    pub use_fresnel: bool,
}

impl Default for BlinnPhongShader {
    fn default() -> Self {
        BlinnPhongShader { use_fresnel: true }
    }
}

impl BlinnPhongShader {
    pub fn new(use_fresnel: bool) -> BlinnPhongShader {
        BlinnPhongShader { use_fresnel }
    }

    /// Lambert term. Transmissive surfaces scatter no diffuse light.
    fn lambert_diffuse(ms: &MaterialSample, n: Vector3f, l: Vector3f) -> Spectrum {
        if ms.opacity < 1.0 {
            return Spectrum::black();
        }
        ms.base_color * n.dot(l).max(0.0)
    }

    /// Blinn half-vector specular lobe, Fresnel-weighted for dielectrics.
    fn blinn_specular(&self, ms: &MaterialSample, n: Vector3f, l: Vector3f, v: Vector3f) -> Spectrum {
        let h = (l + v).normalize();
        let ndoth = n.dot(h).max(0.0);
        let shininess = ms.shininess.max(1.0);

        let mut spec = ms.spec_color * ndoth.powf(shininess);
        if self.use_fresnel && ms.ior > 1.0 {
            let f = fresnel_schlick(n, v, dielectric_f0(ms.ior));
            spec = spec * f;
        }
        spec
    }

    fn shade_sampled(
        &self,
        hit: &SurfaceInteraction<'_>,
        ms: &MaterialSample,
        n: Vector3f,
        light: &Light,
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        if light.is_ambient() {
            return Spectrum::black();
        }

        let (light_dir, light_distance) = light.direction_and_distance(hit.point());
        if shadow_trace(hit, light_dir, light_distance, scene) {
            return Spectrum::black();
        }

        let light_intensity = light.intensity_at(hit.point());
        if light_intensity <= 0.0 {
            return Spectrum::black();
        }

        let l = light_dir.normalize();
        let v = view_dir.normalize();

        let diffuse = Self::lambert_diffuse(ms, n, l);
        let specular = self.blinn_specular(ms, n, l, v);

        (diffuse + specular) * light_intensity
    }
}

impl Shader for BlinnPhongShader {
    fn shade(
        &self,
        hit: &SurfaceInteraction<'_>,
        light: &Light,
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        let ms = hit.sample_material();
        let n = shading_normal(hit, &ms);
        self.shade_sampled(hit, &ms, n, light, view_dir, scene)
    }

    fn shade_multiple_lights(
        &self,
        hit: &SurfaceInteraction<'_>,
        lights: &[Light],
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        let ms = hit.sample_material();
        let n = shading_normal(hit, &ms);
        let is_transmissive = ms.opacity < 1.0 && ms.ior > 1.0;

        let mut accum = Spectrum::black();
        for light in lights {
            if light.is_ambient() {
                accum += ms.base_color * light.intensity_at(hit.point());
            } else {
                accum += self.shade_sampled(hit, &ms, n, light, view_dir, scene);
            }
        }

        // Glass keeps a view-side highlight even though its diffuse term
        // is suppressed.
        if is_transmissive {
            let v = view_dir.normalize();
            accum += self.blinn_specular(&ms, n, -v, v);
        }

        accum += ms.emission;

        accum.saturate8()
    }
}
