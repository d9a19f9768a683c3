use crate::Vector3f;

mod point;
mod vector;

pub use self::point::Point3;
pub use self::vector::Vector3;

/// Flip `v` so that it lies in the same hemisphere as `reference`.
pub fn face_forward(v: Vector3f, reference: Vector3f) -> Vector3f {
    if v.dot(reference) < 0.0 {
        -v
    } else {
        v
    }
}

/// Create an orthogonal coordinate system from a single (unit) vector.
pub fn coordinate_system(v1: Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if v1.x.abs() > v1.y.abs() {
        Vector3::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3 = v1.cross(v2);

    (v2, v3)
}

pub fn distance(p1: Point3<f32>, p2: Point3<f32>) -> f32 {
    (p1 - p2).length()
}

pub fn distance_squared(p1: Point3<f32>, p2: Point3<f32>) -> f32 {
    (p1 - p2).length_squared()
}
