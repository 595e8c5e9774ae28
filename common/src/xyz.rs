use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec3 {
    pub x: i128,
    pub y: i128,
    pub z: i128,
}

impl Vec3 {
    pub fn new(x: i128, y: i128, z: i128) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Self) -> i128 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Exact division of every component, `None` if any of them has a remainder.
    pub fn div_exact(&self, d: i128) -> Option<Self> {
        if d == 0 || self.x % d != 0 || self.y % d != 0 || self.z % d != 0 {
            return None;
        }

        Some(Self::new(self.x / d, self.y / d, self.z / d))
    }

    pub fn sum(&self) -> i128 {
        self.x + self.y + self.z
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i128> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: i128) -> Self::Output {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
