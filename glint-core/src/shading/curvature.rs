use super::Shader;
use crate::light::Light;
use crate::primitive::SurfaceInteraction;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::Vector3f;

/// Approximates local curvature by finite differences of the nearest
/// surface normal: flat regions shade dark, tight curvature shades light.
#[derive(Debug, Clone)]
pub struct CurvatureShader {
    pub probe_offset: f32,
}

impl Default for CurvatureShader {
    fn default() -> Self {
        CurvatureShader {
            probe_offset: 0.005,
        }
    }
}

impl Shader for CurvatureShader {
    fn shade(
        &self,
        hit: &SurfaceInteraction<'_>,
        _light: &Light,
        _view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        let offset = self.probe_offset;
        let n = hit.normal().normalize();
        let p = hit.point();

        let nx = scene
            .normal_near(p + Vector3f::new(offset, 0.0, 0.0))
            .normalize();
        let nz = scene
            .normal_near(p + Vector3f::new(0.0, 0.0, offset))
            .normalize();

        let curvature = 1.0 - 0.5 * (n.dot(nx) + n.dot(nz));
        Spectrum::grey(curvature).clamp01()
    }

    fn shade_multiple_lights(
        &self,
        hit: &SurfaceInteraction<'_>,
        _lights: &[Light],
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        // Curvature does not depend on lighting.
        self.shade(hit, &Light::ambient(0.0), view_dir, scene)
    }
}
