//! Box geometry for tower layers, the mover and debris
//!
//! A piece is an axis-aligned box:
//! - center: world position of the box center
//! - size: full extents along x, y, z (y is the shared layer thickness)
//! - axis: horizontal axis along which its footprint gets cut

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Horizontal axis a round moves and cuts along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    X,
    /// First round always moves along Z
    #[default]
    Z,
}

impl Axis {
    /// The other horizontal axis
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Unit vector pointing along the axis
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Z => Vec3::Z,
        }
    }

    /// Component of `v` along this axis
    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Copy of `v` with the component along this axis replaced
    #[inline]
    pub fn with_component(self, mut v: Vec3, value: f32) -> Vec3 {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
        v
    }
}

/// An axis-aligned box: a tower layer, the mover, or a debris chunk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub center: Vec3,
    pub size: Vec3,
    pub axis: Axis,
    pub color: Color,
}

impl Piece {
    pub fn new(center: Vec3, size: Vec3, axis: Axis, color: Color) -> Self {
        Self {
            center,
            size,
            axis,
            color,
        }
    }

    /// Center coordinate along `axis`
    #[inline]
    pub fn center_along(&self, axis: Axis) -> f32 {
        axis.component(self.center)
    }

    /// Extent along `axis`
    #[inline]
    pub fn size_along(&self, axis: Axis) -> f32 {
        axis.component(self.size)
    }

    /// Lowest and highest coordinate covered along `axis`
    pub fn span_along(&self, axis: Axis) -> (f32, f32) {
        let c = self.center_along(axis);
        let half = self.size_along(axis) / 2.0;
        (c - half, c + half)
    }

    /// Footprint area (x * z)
    #[inline]
    pub fn footprint_area(&self) -> f32 {
        self.size.x * self.size.z
    }

    /// Top face height
    #[inline]
    pub fn top_y(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_piece() -> Piece {
        Piece::new(
            Vec3::new(0.5, 0.0, -0.25),
            Vec3::new(1.0, 0.1, 2.0),
            Axis::Z,
            Color::BLACK,
        )
    }

    #[test]
    fn test_axis_flip_alternates() {
        assert_eq!(Axis::default(), Axis::Z);
        assert_eq!(Axis::Z.flipped(), Axis::X);
        assert_eq!(Axis::X.flipped().flipped(), Axis::X);
    }

    #[test]
    fn test_axis_component_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.component(v), 1.0);
        assert_eq!(Axis::Z.component(v), 3.0);

        let w = Axis::Z.with_component(v, -7.0);
        assert_eq!(w, Vec3::new(1.0, 2.0, -7.0));
        assert_eq!(Axis::X.unit().dot(v), 1.0);
    }

    #[test]
    fn test_span_along() {
        let piece = unit_piece();
        let (lo, hi) = piece.span_along(Axis::Z);
        assert!((lo - -1.25).abs() < 1e-6);
        assert!((hi - 0.75).abs() < 1e-6);

        let (lo, hi) = piece.span_along(Axis::X);
        assert!((lo - 0.0).abs() < 1e-6);
        assert!((hi - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_footprint_and_top() {
        let piece = unit_piece();
        assert!((piece.footprint_area() - 2.0).abs() < 1e-6);
        assert!((piece.top_y() - 0.05).abs() < 1e-6);
    }
}
