use super::NoiseParams;
use crate::{Point3f, Vector3f};

/// Cellular noise: distance to the nearest jittered feature point over the
/// 3x3x3 cell neighborhood.
#[derive(Debug, Clone)]
pub struct VoronoiNoise {
    pub params: NoiseParams,
    /// Randomness of the feature point inside its cell, in [0, 1].
    pub jitter: f32,
}

impl Default for VoronoiNoise {
    fn default() -> Self {
        VoronoiNoise {
            params: NoiseParams::default(),
            jitter: 1.0,
        }
    }
}

impl VoronoiNoise {
    pub fn new(params: NoiseParams, jitter: f32) -> VoronoiNoise {
        VoronoiNoise { params, jitter }
    }

    pub fn value(&self, p: Point3f) -> f32 {
        let x = self.params.map(p);

        let ix = x.x.floor() as i32;
        let iy = x.y.floor() as i32;
        let iz = x.z.floor() as i32;

        let mut min_d = f32::INFINITY;
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cx = ix + dx;
                    let cy = iy + dy;
                    let cz = iz + dz;

                    let feature = Vector3f::new(
                        cx as f32 + cell_hash(cx, cy, cz) * self.jitter,
                        cy as f32 + cell_hash(cy, cz, cx) * self.jitter,
                        cz as f32 + cell_hash(cz, cx, cy) * self.jitter,
                    );

                    let d = (x.to_vector() - feature).length();
                    min_d = min_d.min(d);
                }
            }
        }

        min_d * self.params.strength
    }
}

/// Deterministic per-cell pseudo-random value in [0, 1).
#[inline]
fn cell_hash(ix: i32, iy: i32, iz: i32) -> f32 {
    let s = (ix as f32 * 127.1 + iy as f32 * 311.7 + iz as f32 * 74.7).sin() * 43758.5453;
    s.rem_euclid(1.0)
}
