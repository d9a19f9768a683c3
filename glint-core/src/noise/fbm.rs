use super::{NoiseParams, PerlinNoise};
use crate::Point3f;

/// Fractional Brownian motion: octaves of gradient noise summed with
/// increasing frequency and decreasing amplitude, normalized back to
/// roughly [-1, 1].
#[derive(Debug, Clone)]
pub struct FbmNoise {
    pub params: NoiseParams,
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub gain: f32,
    base: PerlinNoise,
}

impl Default for FbmNoise {
    fn default() -> Self {
        FbmNoise {
            params: NoiseParams::default(),
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
            base: PerlinNoise::default(),
        }
    }
}

impl FbmNoise {
    pub fn new(params: NoiseParams, octaves: u32, lacunarity: f32, gain: f32) -> FbmNoise {
        FbmNoise {
            params,
            octaves,
            lacunarity,
            gain,
            base: PerlinNoise::default(),
        }
    }

    pub fn value(&self, p: Point3f) -> f32 {
        let x = self.params.map(p);

        let mut amp = 1.0;
        let mut freq = 1.0;
        let mut total = 0.0;
        let mut amp_sum = 0.0;

        for _ in 0..self.octaves {
            total += amp * self.base.raw(x * freq);
            amp_sum += amp;
            amp *= self.gain;
            freq *= self.lacunarity;
        }

        if amp_sum > 0.0 {
            total /= amp_sum;
        }

        total * self.params.strength
    }
}
