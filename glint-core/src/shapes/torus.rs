use std::f32::consts::PI;

use rand::Rng;

use super::GeometryHit;
use crate::ray::Ray;
use crate::{Point3f, Vector3f};

/// A torus around the Y axis: ring of `radius_major` with a tube of
/// `radius_tube`, centered at `center`.
#[derive(Debug, Clone)]
pub struct Torus {
    pub center: Point3f,
    pub radius_major: f32,
    pub radius_tube: f32,
}

impl Torus {
    pub fn new(center: Point3f, radius_major: f32, radius_tube: f32) -> Torus {
        Torus {
            center,
            radius_major,
            radius_tube,
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<GeometryHit> {
        let o = ray.o - self.center;
        let d = ray.d;

        let rr = self.radius_major * self.radius_major;
        let tt = self.radius_tube * self.radius_tube;

        // Quartic in t for ((p.p) + R^2 - r^2)^2 = 4R^2 (p.x^2 + p.z^2).
        let sum_d_sq = d.dot(d);
        let e = o.dot(o) - rr - tt;
        let f = o.dot(d);
        let four_r2 = 4.0 * rr;

        let c4 = sum_d_sq * sum_d_sq;
        let c3 = 4.0 * sum_d_sq * f;
        let c2 = 2.0 * sum_d_sq * e + 4.0 * f * f + four_r2 * d.y * d.y;
        let c1 = 4.0 * f * e + 2.0 * four_r2 * o.y * d.y;
        let c0 = e * e - four_r2 * (tt - o.y * o.y);

        let (roots, count) = solve_quartic(c4, c3, c2, c1, c0);
        let mut best = f32::INFINITY;
        for &root in roots.iter().take(count) {
            if root > t_min && root < t_max && root < best {
                best = root;
            }
        }
        if !best.is_finite() {
            return None;
        }

        let point = ray.at(best);
        let outward = self.normal_at(point);
        Some(GeometryHit::new(best, point, outward, ray))
    }

    /// Gradient of the implicit torus function, normalized.
    pub fn normal_at(&self, p: Point3f) -> Vector3f {
        let l = p - self.center;
        let k = l.dot(l) - self.radius_major * self.radius_major
            - self.radius_tube * self.radius_tube;
        let nx = 4.0 * l.x * k;
        let ny = 4.0 * l.y * k + 8.0 * self.radius_major * self.radius_major * l.y;
        let nz = 4.0 * l.z * k;
        Vector3f::new(nx, ny, nz).normalize()
    }

    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point3f {
        let u = 2.0 * PI * rng.gen::<f32>();
        let v = 2.0 * PI * rng.gen::<f32>();
        let ring = self.radius_major + self.radius_tube * v.cos();
        self.center + Vector3f::new(ring * u.cos(), self.radius_tube * v.sin(), ring * u.sin())
    }
}

/// Real roots of `c4 x^4 + c3 x^3 + c2 x^2 + c1 x + c0 = 0`, unordered.
///
/// Ferrari's method on the depressed quartic, with the resolvent cubic
/// solved by bracketed bisection (its constant term is `-q^2 <= 0`, so a
/// non-negative real root always exists).
fn solve_quartic(c4: f32, c3: f32, c2: f32, c1: f32, c0: f32) -> ([f32; 4], usize) {
    let mut roots = [0.0f32; 4];
    let mut count = 0;

    if c4.abs() < 1e-12 {
        return (roots, 0);
    }

    // Work in f64: the quartic coefficients span many orders of magnitude.
    let a = f64::from(c3) / f64::from(c4);
    let b = f64::from(c2) / f64::from(c4);
    let c = f64::from(c1) / f64::from(c4);
    let d = f64::from(c0) / f64::from(c4);

    // Depressed form x = y - a/4: y^4 + p y^2 + q y + r.
    let p = b - 3.0 * a * a / 8.0;
    let q = c - a * b / 2.0 + a * a * a / 8.0;
    let r = d - a * c / 4.0 + a * a * b / 16.0 - 3.0 * a * a * a * a / 256.0;
    let shift = -a / 4.0;

    if q.abs() < 1e-10 {
        // Biquadratic: z^2 + p z + r with z = y^2.
        let disc = p * p - 4.0 * r;
        if disc < 0.0 {
            return (roots, 0);
        }
        let sq = disc.sqrt();
        for &z in &[(-p - sq) / 2.0, (-p + sq) / 2.0] {
            if z >= 0.0 {
                let y = z.sqrt();
                roots[count] = (y + shift) as f32;
                count += 1;
                if y > 0.0 {
                    roots[count] = (-y + shift) as f32;
                    count += 1;
                }
            }
        }
        return (roots, count);
    }

    // Resolvent cubic 8m^3 + 8p m^2 + (2p^2 - 8r) m - q^2 = 0; find its
    // positive root so both factor quadratics below are real.
    let cubic = |m: f64| 8.0 * m * m * m + 8.0 * p * m * m + (2.0 * p * p - 8.0 * r) * m - q * q;
    let mut hi = 1.0;
    while cubic(hi) < 0.0 {
        hi *= 2.0;
        if hi > 1e30 {
            return (roots, 0);
        }
    }
    let mut lo = 0.0;
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if cubic(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let m = 0.5 * (lo + hi);
    if m <= 0.0 {
        return (roots, 0);
    }

    // (y^2 + p/2 + m)^2 = 2m (y - q/(4m))^2 factors the quartic into two
    // quadratics y^2 -/+ s y + (p/2 + m +/- q/(2s)).
    let s = (2.0 * m).sqrt();
    let t0 = p / 2.0 + m;
    for &(sign, cterm) in &[(-1.0f64, t0 + q / (2.0 * s)), (1.0, t0 - q / (2.0 * s))] {
        // y^2 + sign*s*y + cterm = 0
        let disc = s * s - 4.0 * cterm;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            roots[count] = ((-sign * s - sq) / 2.0 + shift) as f32;
            count += 1;
            roots[count] = ((-sign * s + sq) / 2.0 + shift) as f32;
            count += 1;
        }
    }

    (roots, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Vector3};
    use approx::assert_relative_eq;

    fn ring() -> Torus {
        Torus::new(Point3::origin(), 2.0, 0.5)
    }

    #[test]
    fn crosses_the_tube() {
        // Straight through the tube at x=2: crossings at z = +/-1.5.
        let r = Ray::new(Point3::new(2.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let hit = ring().intersect(&r, 1e-3, f32::INFINITY).unwrap();
        assert_relative_eq!(hit.t, 3.5, epsilon = 1e-3);
    }

    #[test]
    fn diametral_ray_takes_the_first_of_four_crossings() {
        let r = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let hit = ring().intersect(&r, 1e-3, f32::INFINITY).unwrap();
        assert_relative_eq!(hit.t, 2.5, epsilon = 1e-3);
    }

    #[test]
    fn through_the_hole_misses() {
        let r = Ray::new(Point3::new(0.0, -5.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(ring().intersect(&r, 1e-3, f32::INFINITY).is_none());
    }

    #[test]
    fn hit_point_satisfies_the_implicit_equation() {
        use rand::SeedableRng;
        let t = ring();
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let mut hits = 0;
        for _ in 0..200 {
            let o = Point3::new(
                8.0 * (rng.gen::<f32>() - 0.5),
                8.0 * (rng.gen::<f32>() - 0.5),
                -6.0,
            );
            let target = Point3::new(
                2.0 * (rng.gen::<f32>() - 0.5),
                rng.gen::<f32>() - 0.5,
                2.0 * (rng.gen::<f32>() - 0.5),
            );
            let ray = Ray::new(o, (target - o).normalize());
            if let Some(hit) = t.intersect(&ray, 1e-3, f32::INFINITY) {
                hits += 1;
                let l = hit.point - t.center;
                let lhs = (l.dot(l) + 4.0 - 0.25).powi(2);
                let rhs = 16.0 * (l.x * l.x + l.z * l.z);
                assert!(
                    (lhs - rhs).abs() < 0.05 * rhs.max(1.0),
                    "implicit residual too large at t={}",
                    hit.t
                );
            }
        }
        assert!(hits > 10, "sampling produced too few torus hits");
    }

    #[test]
    fn normal_points_away_from_the_tube_center() {
        let t = ring();
        // Outermost point of the ring on +X.
        let n = t.normal_at(Point3::new(2.5, 0.0, 0.0));
        assert_relative_eq!(n.x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn random_points_lie_on_the_surface() {
        use rand::SeedableRng;
        let t = ring();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let p = t.random_point(&mut rng);
            let ring_dist = ((p.x * p.x + p.z * p.z).sqrt() - 2.0).powi(2) + p.y * p.y;
            assert_relative_eq!(ring_dist.sqrt(), 0.5, epsilon = 1e-4);
        }
    }
}
