//! Reading environment maps and writing rendered images.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::codecs::hdr::HdrDecoder;
use image::GenericImageView;
use log::info;

use crate::spectrum::Spectrum;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Plain-text P3 portable pixmap.
    Ppm,
    Png,
}

impl ImageFormat {
    fn extension(self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
        }
    }

    fn from_extension(path: &Path) -> Result<ImageFormat> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("ppm") => Ok(ImageFormat::Ppm),
            Some("png") => Ok(ImageFormat::Png),
            other => bail!(
                "cannot infer image format from {:?}; use a .ppm or .png filename \
                 or pass the formats explicitly",
                other
            ),
        }
    }
}

/// Write `rgb` (8-bit, row-major, top-down) to `path`.
///
/// Without an explicit format list the filename extension selects the
/// encoding; with one, each requested format is written next to `path`
/// under its own extension.
pub fn write_image<P: AsRef<Path>>(
    path: P,
    rgb: &[u8],
    width: u32,
    height: u32,
    formats: Option<&[ImageFormat]>,
) -> Result<()> {
    let path = path.as_ref();
    let formats = match formats {
        Some(fs) => fs.to_vec(),
        None => vec![ImageFormat::from_extension(path)?],
    };

    for format in formats {
        let target = path.with_extension(format.extension());
        info!("writing {} image {}", format.extension(), target.display());
        match format {
            ImageFormat::Ppm => write_ppm(&target, rgb, width, height)?,
            ImageFormat::Png => write_png(&target, rgb, width, height)?,
        }
    }
    Ok(())
}

fn write_ppm(path: &Path, rgb: &[u8], width: u32, height: u32) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create PPM file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write!(out, "P3\n{} {}\n255\n", width, height)?;
    for px in rgb.chunks(3) {
        writeln!(out, "{} {} {}", px[0], px[1], px[2])?;
    }
    out.flush()?;
    Ok(())
}

fn write_png(path: &Path, rgb: &[u8], width: u32, height: u32) -> Result<()> {
    image::save_buffer(path, rgb, width, height, image::ColorType::Rgb8)
        .with_context(|| format!("failed to save PNG file {}", path.display()))
}

/// Read an image into linear radiance pixels. Radiance `.hdr` maps come
/// back as-is; LDR formats are treated as already-linear 8-bit data.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<(Vec<Spectrum>, u32, u32)> {
    let path = path.as_ref();
    let is_hdr = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("hdr"))
        .unwrap_or(false);

    if is_hdr {
        read_image_hdr(path)
    } else {
        read_image_ldr(path)
    }
}

fn read_image_ldr(path: &Path) -> Result<(Vec<Spectrum>, u32, u32)> {
    info!("loading image {}", path.display());
    let img = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let (width, height) = img.dimensions();

    let rgb = img.to_rgb8().into_raw();
    let pixels = rgb
        .chunks(3)
        .map(|p| {
            Spectrum::rgb(
                f32::from(p[0]) / 255.0,
                f32::from(p[1]) / 255.0,
                f32::from(p[2]) / 255.0,
            )
        })
        .collect();

    Ok((pixels, width, height))
}

fn read_image_hdr(path: &Path) -> Result<(Vec<Spectrum>, u32, u32)> {
    info!("loading HDR image {}", path.display());
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let decoder = HdrDecoder::new(BufReader::new(file))
        .with_context(|| format!("failed to decode HDR header of {}", path.display()))?;

    let meta = decoder.metadata();
    let data = decoder
        .read_image_hdr()
        .with_context(|| format!("failed to decode HDR data of {}", path.display()))?;

    let pixels = data
        .into_iter()
        .map(|p| Spectrum::rgb(p.0[0], p.0[1], p.0[2]))
        .collect();

    Ok((pixels, meta.width, meta.height))
}
