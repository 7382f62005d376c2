//! Alignment between the mover and the top of the tower

use serde::{Deserialize, Serialize};

use super::piece::{Axis, Piece};

/// Result of measuring the mover against the top piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    /// Signed offset of the mover from the top along the active axis
    pub hangover: f32,
    /// +1.0 for a front (or exact) hangover, -1.0 for a rear one
    pub sign: f32,
    /// Extent of the top piece along the active axis
    pub reference_size: f32,
}

impl Alignment {
    /// True when nothing overlaps; an overshoot equal to the top's width still counts as a hit
    ///
    /// A NaN hangover is a miss.
    #[inline]
    pub fn is_miss(&self) -> bool {
        self.hangover.is_nan() || self.hangover.abs() > self.reference_size
    }

    /// Length of the overlapping span (0 on a miss)
    pub fn overlap(&self) -> f32 {
        (self.reference_size - self.hangover.abs()).max(0.0)
    }
}

/// Measure `mover` against `top` along `axis`
pub fn evaluate(mover: &Piece, top: &Piece, axis: Axis) -> Alignment {
    let hangover = mover.center_along(axis) - top.center_along(axis);
    Alignment {
        hangover,
        sign: if hangover >= 0.0 { 1.0 } else { -1.0 },
        reference_size: top.size_along(axis),
    }
}
