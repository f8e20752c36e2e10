//! 2D points in canvas pixel space

use serde::{Deserialize, Serialize};

/// A point (or vector) in canvas pixel coordinates, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Point) -> f32 {
        (other - *self).length()
    }

    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Angle of the segment `self -> other`, `atan2(dy, dx)`.
    pub fn angle_to(&self, other: Point) -> f32 {
        let d = other - *self;
        d.y.atan2(d.x)
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Size of the canvas container in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has measured a real container.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_helpers() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(700.0, 100.0);
        assert_eq!(a.distance(b), 600.0);
        assert_eq!(a.midpoint(b), Point::new(400.0, 100.0));
        assert_eq!(a.angle_to(b), 0.0);
        assert_eq!(b.angle_to(a), std::f32::consts::PI);
    }

    #[test]
    fn unmeasured_container() {
        assert!(!ContainerSize::new(0.0, 600.0).is_measured());
        assert!(!ContainerSize::new(800.0, -1.0).is_measured());
        assert!(ContainerSize::new(800.0, 600.0).is_measured());
    }
}
