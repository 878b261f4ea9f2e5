/// CORRIDOR Project
/// `File` math.rs
/// `Description` Math utilities implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("<{}, {}>", self.x, self.y))
    }
} // impl std::fmt::Display for Vec2

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Scaling by scalar
impl<T: Mul<Output = T> + Copy> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl<T: Mul<Output = T> + Add<Output = T> + Copy> Vec2<T> {
    /// Dot product
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    } // fn dot
}

impl Vec2<f32> {
    /// Vector length getting function
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    } // fn length

    /// Normalized vector getting function
    /// * Returns zero vector for zero input
    pub fn normalized(self) -> Self {
        let len = self.length();

        if len == 0.0 {
            self
        } else {
            self * (1.0 / len)
        }
    } // fn normalized

    /// Counter-clockwise rotation function
    /// * `angle` - angle in radians
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    } // fn rotated

    /// Z component of 3D cross product
    pub fn cross(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    } // fn cross
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ext2<T> {
    pub width: T,
    pub height: T,
}

pub type Vec2f = Vec2<f32>;
pub type Vec2si = Vec2<isize>;
pub type Ext2su = Ext2<usize>;


// file math.rs
