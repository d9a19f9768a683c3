//! Post-render image adjustments. Currently a single step: integer
//! upscaling of the finished frame.

use anyhow::{anyhow, Result};
use image::imageops::FilterType;
use image::RgbImage;

#[derive(Debug, Clone, Copy)]
pub struct PostProcessConfig {
    pub enabled: bool,
    pub scale_factor: u32,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        PostProcessConfig {
            enabled: false,
            scale_factor: 1,
        }
    }
}

/// Apply the configured steps to an 8-bit RGB buffer, returning the new
/// buffer and dimensions. A disabled config passes the input through.
pub fn apply(
    config: &PostProcessConfig,
    rgb: Vec<u8>,
    width: u32,
    height: u32,
) -> Result<(Vec<u8>, u32, u32)> {
    if !config.enabled || config.scale_factor <= 1 {
        return Ok((rgb, width, height));
    }

    let img = RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", width, height))?;

    let new_w = width * config.scale_factor;
    let new_h = height * config.scale_factor;
    let scaled = image::imageops::resize(&img, new_w, new_h, FilterType::CatmullRom);

    Ok((scaled.into_raw(), new_w, new_h))
}
