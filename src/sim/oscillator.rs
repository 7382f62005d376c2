//! Mover sweep along the active axis
//!
//! The mover does not bounce off fixed walls. It turns around once it has
//! overshot the top piece by more than `bound`, so the sweep is centered on
//! wherever the stack currently is.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::piece::{Axis, Piece};

/// Speed after the reflection check for the given hangover
///
/// Pure: depends only on the current speed, the signed offset from the top
/// piece, and the bound.
#[inline]
pub fn reflect_speed(speed: f32, hangover: f32, bound: f32) -> f32 {
    if (hangover > bound && speed > 0.0) || (hangover < -bound && speed < 0.0) {
        -speed
    } else {
        speed
    }
}

/// Signed speed of the mover plus its reflection bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Sign encodes direction along the axis
    pub speed: f32,
    pub bound: f32,
    /// Axis of the current round
    pub axis: Axis,
    nominal_speed: f32,
}

impl Oscillator {
    pub fn new(nominal_speed: f32, bound: f32, axis: Axis) -> Self {
        Self {
            speed: nominal_speed,
            bound,
            axis,
            nominal_speed,
        }
    }

    /// Start a new round along `axis` at nominal speed
    pub fn reset(&mut self, axis: Axis) {
        self.axis = axis;
        self.speed = self.nominal_speed;
    }

    /// Freeze the mover for measurement
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }

    /// Displacement to apply to the mover this frame
    ///
    /// Reflects first (using the pre-move hangover), then moves.
    pub fn advance(&mut self, dt: f32, mover: &Piece, top: &Piece) -> Vec3 {
        let hangover = mover.center_along(self.axis) - top.center_along(self.axis);
        self.speed = reflect_speed(self.speed, hangover, self.bound);
        self.axis.unit() * (self.speed * dt)
    }
}
