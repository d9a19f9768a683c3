//! What a ray sees when it escapes the scene: a procedural sky gradient by
//! default, or an equirectangular environment map.

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::spectrum::Spectrum;
use crate::{clamp, Vector3f};

#[derive(Debug, Clone)]
pub enum Background {
    /// Vertical white-to-blue gradient.
    Gradient,
    Skybox(Skybox),
}

impl Background {
    pub fn sample(&self, direction: Vector3f) -> Spectrum {
        match self {
            Background::Gradient => {
                let d = direction.normalize();
                let t = 0.5 * (d.y + 1.0);
                crate::lerp(t, Spectrum::white(), Spectrum::rgb(0.392, 0.392, 1.0))
            }
            Background::Skybox(sky) => sky.sample(direction),
        }
    }
}

/// An environment map in equirectangular (latitude/longitude) layout.
#[derive(Debug, Clone)]
pub struct Skybox {
    width: u32,
    height: u32,
    pixels: Vec<Spectrum>,
}

impl Skybox {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Skybox> {
        let (pixels, width, height) = crate::imageio::read_image(path.as_ref())?;
        info!(
            "loaded {}x{} environment map from {}",
            width,
            height,
            path.as_ref().display()
        );
        Ok(Skybox {
            width,
            height,
            pixels,
        })
    }

    pub fn from_pixels(pixels: Vec<Spectrum>, width: u32, height: u32) -> Skybox {
        assert_eq!(pixels.len(), (width * height) as usize);
        Skybox {
            width,
            height,
            pixels,
        }
    }

    /// Look up the texel the direction points at. `v = 0` is straight up.
    pub fn sample(&self, direction: Vector3f) -> Spectrum {
        let d = direction.normalize();
        if d.length_squared() == 0.0 {
            return Spectrum::black();
        }
        let u = 0.5 + d.z.atan2(d.x) / (2.0 * std::f32::consts::PI);
        let v = clamp(d.y, -1.0, 1.0).acos() / std::f32::consts::PI;

        let x = clamp((u * self.width as f32) as i64, 0, i64::from(self.width) - 1) as u32;
        let y = clamp((v * self.height as f32) as i64, 0, i64::from(self.height) - 1) as u32;
        self.pixels[(y * self.width + x) as usize]
    }
}
