use lazy_static::lazy_static;
use rand::prelude::*;

use super::NoiseParams;
use crate::{lerp, Point3f};

lazy_static! {
    /// Permutation table shared by every Perlin instance, duplicated once so
    /// wrapped lookups never need a modulo. Seeded so renders are
    /// reproducible across runs.
    pub(crate) static ref PERM: [usize; 512] = {
        let mut perm: Vec<usize> = (0..256).collect();
        let mut rng = StdRng::seed_from_u64(42);
        perm.shuffle(&mut rng);
        let mut table = [0usize; 512];
        for i in 0..512 {
            table[i] = perm[i & 255];
        }
        table
    };
}

/// Quintic fade curve, zero first and second derivative at both ends.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Gradient contribution for hash `h`. The low 4 bits pick one of the
/// classic gradient directions without an explicit gradient table.
#[inline]
pub(crate) fn grad(h: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = h & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Classic gradient noise after Perlin's reference implementation.
#[derive(Debug, Clone, Default)]
pub struct PerlinNoise {
    pub params: NoiseParams,
}

impl PerlinNoise {
    pub fn new(params: NoiseParams) -> PerlinNoise {
        PerlinNoise { params }
    }

    pub fn value(&self, p: Point3f) -> f32 {
        let p = self.params.map(p);
        self.raw(p) * self.params.strength
    }

    /// Noise without the configured strength applied; octave sums build on
    /// this so strength scales the finished fractal, not each octave.
    pub(crate) fn raw(&self, p: Point3f) -> f32 {
        let xf = p.x.floor();
        let yf = p.y.floor();
        let zf = p.z.floor();

        // Cell that contains the point, wrapped onto the table.
        let xi = (xf as i32 & 255) as usize;
        let yi = (yf as i32 & 255) as usize;
        let zi = (zf as i32 & 255) as usize;

        // Exact location inside the cell, in [0, 1).
        let x = p.x - xf;
        let y = p.y - yf;
        let z = p.z - zf;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        // Hash the eight cell corners.
        let a = PERM[xi] + yi;
        let aa = PERM[a] + zi;
        let ab = PERM[a + 1] + zi;
        let b = PERM[xi + 1] + yi;
        let ba = PERM[b] + zi;
        let bb = PERM[b + 1] + zi;

        let g000 = grad(PERM[aa], x, y, z);
        let g100 = grad(PERM[ba], x - 1.0, y, z);
        let g010 = grad(PERM[ab], x, y - 1.0, z);
        let g110 = grad(PERM[bb], x - 1.0, y - 1.0, z);
        let g001 = grad(PERM[aa + 1], x, y, z - 1.0);
        let g101 = grad(PERM[ba + 1], x - 1.0, y, z - 1.0);
        let g011 = grad(PERM[ab + 1], x, y - 1.0, z - 1.0);
        let g111 = grad(PERM[bb + 1], x - 1.0, y - 1.0, z - 1.0);

        // Trilinear blend of the corner contributions.
        let x00 = lerp(u, g000, g100);
        let x10 = lerp(u, g010, g110);
        let x01 = lerp(u, g001, g101);
        let x11 = lerp(u, g011, g111);

        let y0 = lerp(v, x00, x10);
        let y1 = lerp(v, x01, x11);

        lerp(w, y0, y1)
    }
}
