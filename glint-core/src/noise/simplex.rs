use super::perlin::{grad, PERM};
use super::NoiseParams;
use crate::Point3f;

const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

/// 3D simplex noise: the skewed-grid variant with four corner
/// contributions per sample instead of eight.
#[derive(Debug, Clone, Default)]
pub struct SimplexNoise {
    pub params: NoiseParams,
}

impl SimplexNoise {
    pub fn new(params: NoiseParams) -> SimplexNoise {
        SimplexNoise { params }
    }

    pub fn value(&self, p: Point3f) -> f32 {
        let x = self.params.map(p);

        // Skew into the simplex grid to find the containing cell.
        let s = (x.x + x.y + x.z) * F3;
        let i = (x.x + s).floor() as i32;
        let j = (x.y + s).floor() as i32;
        let k = (x.z + s).floor() as i32;

        // Unskew back to get the displacement from the cell origin.
        let t = (i + j + k) as f32 * G3;
        let x0 = x.x - (i as f32 - t);
        let y0 = x.y - (j as f32 - t);
        let z0 = x.z - (k as f32 - t);

        // Rank the displacement components to pick the simplex corner order.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let corners = [
            (0, 0, 0, x0, y0, z0),
            (
                i1,
                j1,
                k1,
                x0 - i1 as f32 + G3,
                y0 - j1 as f32 + G3,
                z0 - k1 as f32 + G3,
            ),
            (
                i2,
                j2,
                k2,
                x0 - i2 as f32 + 2.0 * G3,
                y0 - j2 as f32 + 2.0 * G3,
                z0 - k2 as f32 + 2.0 * G3,
            ),
            (
                1,
                1,
                1,
                x0 - 1.0 + 3.0 * G3,
                y0 - 1.0 + 3.0 * G3,
                z0 - 1.0 + 3.0 * G3,
            ),
        ];

        let mut total = 0.0;
        for &(di, dj, dk, cx, cy, cz) in &corners {
            let t = 0.6 - cx * cx - cy * cy - cz * cz;
            if t > 0.0 {
                let t2 = t * t;
                let h = hash(i + di, j + dj, k + dk);
                total += t2 * t2 * grad(h, cx, cy, cz);
            }
        }

        32.0 * total * self.params.strength
    }
}

/// Lattice hash through the shared permutation table.
#[inline]
fn hash(i: i32, j: i32, k: i32) -> usize {
    let ii = (i & 255) as usize;
    let jj = (j & 255) as usize;
    let kk = (k & 255) as usize;
    PERM[ii + PERM[jj + PERM[kk]]]
}
