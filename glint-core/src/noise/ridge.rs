use super::{NoiseParams, PerlinNoise};
use crate::Point3f;

/// Ridged multifractal: each octave folds the noise with `1 - |n|` and
/// squares it, turning the zero crossings of the base field into sharp
/// ridge lines.
#[derive(Debug, Clone)]
pub struct RidgeNoise {
    pub params: NoiseParams,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
    base: PerlinNoise,
}

impl Default for RidgeNoise {
    fn default() -> Self {
        RidgeNoise {
            params: NoiseParams::default(),
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
            base: PerlinNoise::default(),
        }
    }
}

impl RidgeNoise {
    pub fn new(params: NoiseParams, octaves: u32, lacunarity: f32, gain: f32) -> RidgeNoise {
        RidgeNoise {
            params,
            octaves,
            lacunarity,
            gain,
            base: PerlinNoise::default(),
        }
    }

    pub fn value(&self, p: Point3f) -> f32 {
        let x = self.params.map(p);

        let mut amp = 0.5;
        let mut freq = 1.0;
        let mut total = 0.0;

        for _ in 0..self.octaves {
            let mut n = self.base.raw(x * freq);
            n = 1.0 - n.abs();
            n *= n;
            total += amp * n;

            freq *= self.lacunarity;
            amp *= self.gain;
        }

        total * self.params.strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;

    #[test]
    fn ridges_are_non_negative() {
        let ridge = RidgeNoise::default();
        for i in 0..100 {
            let v = ridge.value(Point3::new(0.1 * i as f32, -0.3, 0.9));
            assert!(v >= 0.0);
            assert!(v <= 1.0 + 1e-4);
        }
    }
}
