use super::Shader;
use crate::light::Light;
use crate::primitive::SurfaceInteraction;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::Vector3f;

/// Greyscale distance from the camera, white at zero and black from
/// `max_depth` outward.
#[derive(Debug, Clone)]
pub struct DepthShader {
    pub max_depth: f32,
}

impl Default for DepthShader {
    fn default() -> Self {
        DepthShader { max_depth: 10.0 }
    }
}

impl Shader for DepthShader {
    fn shade(
        &self,
        hit: &SurfaceInteraction<'_>,
        _light: &Light,
        _view_dir: Vector3f,
        _scene: &Scene,
    ) -> Spectrum {
        let depth = hit.t().min(self.max_depth);
        Spectrum::grey(1.0 - depth / self.max_depth)
    }

    fn shade_multiple_lights(
        &self,
        hit: &SurfaceInteraction<'_>,
        _lights: &[Light],
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        // Depth does not depend on lighting.
        self.shade(hit, &Light::ambient(0.0), view_dir, scene)
    }
}
