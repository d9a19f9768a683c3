use std::fmt::{Display, Error, Formatter};
use std::ops::{Add, AddAssign, Div, Index, Mul, Sub, SubAssign};

use num::Num;

use super::Vector3;

/// A position in 3D space. Kept distinct from [`Vector3`] so that positions
/// and directions cannot be mixed up silently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Point3<T> {
        Point3 { x, y, z }
    }
}

impl<T> Point3<T>
where
    T: Num + Copy,
{
    pub fn to_vector(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Point3<f32> {
    pub fn origin() -> Point3<f32> {
        Point3::new(0.0, 0.0, 0.0)
    }
}

impl<T> Add<Vector3<T>> for Point3<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Point3<T>;

    fn add(self, rhs: Vector3<T>) -> Point3<T> {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T> AddAssign<Vector3<T>> for Point3<T>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Vector3<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T> Sub<Point3<T>> for Point3<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vector3<T>;

    fn sub(self, rhs: Point3<T>) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T> Sub<Vector3<T>> for Point3<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Point3<T>;

    fn sub(self, rhs: Vector3<T>) -> Point3<T> {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T> SubAssign<Vector3<T>> for Point3<T>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// Uniform scale of the position, used by procedural textures that sample a
/// noise field at `p * frequency`.
impl<T> Mul<T> for Point3<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point3<T>;

    fn mul(self, rhs: T) -> Point3<T> {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T> Div<T> for Point3<T>
where
    T: Div<Output = T> + Copy,
{
    type Output = Point3<T>;

    fn div(self, rhs: T) -> Point3<T> {
        Point3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T> Index<usize> for Point3<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("invalid index into 3-component point"),
        }
    }
}

impl<T> Display for Point3<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(0.0, 0.0, 1.0);
        let v = p - q;
        assert_eq!(v, Vector3::new(1.0, 2.0, 2.0));
        assert_eq!(q + v, p);
        assert_eq!(p - v, q);
    }
}
