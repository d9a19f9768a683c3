use super::Shader;
use crate::light::Light;
use crate::primitive::SurfaceInteraction;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crate::{Point3f, Vector3f};

/// Procedural split patterns for [`DiffShader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffPattern {
    /// Alternating cells in the XZ plane.
    Checker,
    /// Diagonal grid with double-width lines in the XY plane.
    CheckedLines,
    /// Vertical stripes along X.
    Stripes,
    /// Concentric rings in the XZ plane.
    Rings,
    /// Left half / right half of world space.
    HalfImage,
}

/// Renders two shading models side by side, routed by a procedural
/// pattern over world space. Useful for A/B comparison of shaders.
pub struct DiffShader {
    pub a: Box<dyn Shader>,
    pub b: Box<dyn Shader>,
    pub scale: f32,
    pub pattern: DiffPattern,
}

impl DiffShader {
    pub fn new(a: Box<dyn Shader>, b: Box<dyn Shader>) -> DiffShader {
        DiffShader {
            a,
            b,
            scale: 4.0,
            pattern: DiffPattern::Checker,
        }
    }

    pub fn with_pattern(mut self, pattern: DiffPattern) -> DiffShader {
        self.pattern = pattern;
        self
    }

    /// 0 routes to shader A, 1 to shader B.
    fn select(&self, p: Point3f) -> u8 {
        match self.pattern {
            DiffPattern::Checker => {
                let x = (p.x * self.scale).floor() as i64;
                let z = (p.z * self.scale).floor() as i64;
                ((x + z) & 1) as u8
            }
            DiffPattern::CheckedLines => {
                let cx = p.x * self.scale;
                let cy = p.y * self.scale;
                let line_x = cx - cx.floor() < 0.5;
                let line_y = cy - cy.floor() < 0.5;
                if line_x ^ line_y {
                    0
                } else {
                    1
                }
            }
            DiffPattern::Stripes => ((p.x * self.scale).floor() as i64).rem_euclid(2) as u8,
            DiffPattern::Rings => {
                let r = (p.x * p.x + p.z * p.z).sqrt();
                ((r * self.scale).floor() as i64).rem_euclid(2) as u8
            }
            DiffPattern::HalfImage => {
                if p.x < 0.0 {
                    0
                } else {
                    1
                }
            }
        }
    }
}

impl Shader for DiffShader {
    fn shade(
        &self,
        hit: &SurfaceInteraction<'_>,
        light: &Light,
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        let shader = if self.select(hit.point()) == 0 {
            &self.a
        } else {
            &self.b
        };
        shader.shade(hit, light, view_dir, scene).clamp01()
    }

    fn shade_multiple_lights(
        &self,
        hit: &SurfaceInteraction<'_>,
        lights: &[Light],
        view_dir: Vector3f,
        scene: &Scene,
    ) -> Spectrum {
        let shader = if self.select(hit.point()) == 0 {
            &self.a
        } else {
            &self.b
        };
        shader.shade_multiple_lights(hit, lights, view_dir, scene)
    }
}
