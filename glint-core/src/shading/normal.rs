use super::{shading_normal, Shader};
use crate::light::Light;
use crate::primitive::SurfaceInteraction;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::Vector3f;

/// Maps the (possibly noise-perturbed) shading normal to RGB for preview.
#[derive(Debug, Clone, Default)]
pub struct NormalShader;

impl Shader for NormalShader {
    fn shade(
        &self,
        hit: &SurfaceInteraction<'_>,
        _light: &Light,
        _view_dir: Vector3f,
        _scene: &Scene,
    ) -> Spectrum {
        let ms = hit.sample_material();
        let n = shading_normal(hit, &ms);
        Spectrum::rgb(
            (n.x + 1.0) * 0.5,
            (n.y + 1.0) * 0.5,
            (n.z + 1.0) * 0.5,
        )
    }

    fn shade_multiple_lights(
        &self,
        hit: &SurfaceInteraction<'_>,
        _lights: &[Light],
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        // Normals do not depend on lighting.
        self.shade(hit, &Light::ambient(0.0), view_dir, scene)
    }
}
