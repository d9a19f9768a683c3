use super::Shader;
use crate::light::Light;
use crate::primitive::SurfaceInteraction;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::Vector3f;

/// Colours the surface by the angle between the normal and either the view
/// or the light direction, run through a sine for banding so grazing-angle
/// structure stands out.
#[derive(Debug, Clone)]
pub struct DotProductShader {
    /// Compare against the first light instead of the view direction.
    pub use_light: bool,
    pub frequency: f32,
}

impl Default for DotProductShader {
    fn default() -> Self {
        DotProductShader {
            use_light: false,
            frequency: 8.0,
        }
    }
}

impl Shader for DotProductShader {
    fn shade(
        &self,
        hit: &SurfaceInteraction<'_>,
        light: &Light,
        view_dir: Vector3f,
        _scene: &Scene,
    ) -> Spectrum {
        let n = hit.normal().normalize();
        let cosine = if self.use_light && !light.is_ambient() {
            let (l, _) = light.direction_and_distance(hit.point());
            n.dot(l).max(-1.0)
        } else {
            n.dot((-view_dir).normalize()).max(-1.0)
        };

        // Map [-1, 1] onto [0, 1] and band it.
        let t = 0.5 * (cosine + 1.0);
        Spectrum::rgb((t * self.frequency).sin() * 0.5 + 0.5, t, 1.0 - t).clamp01()
    }

    fn shade_multiple_lights(
        &self,
        hit: &SurfaceInteraction<'_>,
        lights: &[Light],
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        let first = lights.first().cloned().unwrap_or_else(|| Light::ambient(0.0));
        self.shade(hit, &first, view_dir, scene)
    }
}
