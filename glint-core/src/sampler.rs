use rand::rngs::StdRng;
use rand::Rng;

/// Fixed 2x2 sub-pixel offsets, in fractions of one pixel.
const GRID_2X2: [(f32, f32); 4] = [(-0.25, -0.25), (0.25, -0.25), (-0.25, 0.25), (0.25, 0.25)];

/// How sub-pixel sample positions are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePattern {
    /// Uniform random jitter within one pixel width.
    UniformJitter,
    /// The fixed 2x2 grid; deterministic, intended for 4 samples per pixel.
    Grid2x2,
}

impl SamplePattern {
    /// Offset `(du, dv)` for sample `s`, already scaled into normalized
    /// image-plane units by the per-axis pixel sizes.
    pub fn offset(&self, s: u32, pixel_w: f32, pixel_h: f32, rng: &mut StdRng) -> (f32, f32) {
        match self {
            SamplePattern::UniformJitter => (
                (rng.gen::<f32>() - 0.5) * pixel_w,
                (rng.gen::<f32>() - 0.5) * pixel_h,
            ),
            SamplePattern::Grid2x2 => {
                let (ju, jv) = GRID_2X2[(s & 3) as usize];
                (ju * pixel_w, jv * pixel_h)
            }
        }
    }
}
