//! Game settings
//!
//! Fixed at construction time. Every gameplay tunable (palette, speeds,
//! spawn offsets, pedestal height) lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Color;

/// Reasons a [`Settings`] value is rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A length, speed or bound that must be strictly positive and finite
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    /// Lerp step outside (0, 1]
    #[error("`lerp_step` must be in (0, 1], got {0}")]
    LerpStep(f32),
    /// Palette endpoints are identical, the cycle would never change color
    #[error("palette colors must differ, both are {0:?}")]
    FlatPalette(Color),
    /// Autopilot tolerance below zero
    #[error("`autopilot_tolerance` must be non-negative, got {0}")]
    AutopilotTolerance(f32),
    /// Settings JSON could not be parsed
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Construction-time configuration for a [`crate::GameCore`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Footprint of the pedestal (x, z); every mover starts from it
    pub base_size: Vec2,
    /// Vertical extent of every piece
    pub layer_thickness: f32,
    /// Vertical distance between stacked layers
    pub layer_offset: f32,
    /// Distance a new mover spawns behind the top along the active axis
    pub spawn_distance: f32,

    /// Overshoot that turns the mover around
    pub oscillator_bound: f32,
    /// Speed magnitude restored at the start of each round
    pub nominal_speed: f32,

    /// Color cycle step per created piece
    pub lerp_step: f32,
    pub palette_a: Color,
    pub palette_b: Color,

    /// Decorative layers seeded underneath the base piece
    pub seed_layer_count: usize,

    /// Idle mode fires once |hangover| drops below this
    pub autopilot_tolerance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_size: Vec2::new(BASE_SIZE.0, BASE_SIZE.1),
            layer_thickness: LAYER_THICKNESS,
            layer_offset: LAYER_OFFSET,
            spawn_distance: SPAWN_DISTANCE,

            oscillator_bound: OSCILLATOR_BOUND,
            nominal_speed: NOMINAL_SPEED,

            lerp_step: LERP_STEP,
            palette_a: Color::from_rgb8(PALETTE_A),
            palette_b: Color::from_rgb8(PALETTE_B),

            seed_layer_count: SEED_LAYER_COUNT,

            autopilot_tolerance: AUTOPILOT_TOLERANCE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field, returning the first violation
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("base_size.x", self.base_size.x),
            ("base_size.y", self.base_size.y),
            ("layer_thickness", self.layer_thickness),
            ("layer_offset", self.layer_offset),
            ("spawn_distance", self.spawn_distance),
            ("oscillator_bound", self.oscillator_bound),
            ("nominal_speed", self.nominal_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        if self.lerp_step <= 0.0 || !(0.0..=1.0).contains(&self.lerp_step) {
            return Err(SettingsError::LerpStep(self.lerp_step));
        }
        if self.palette_a == self.palette_b {
            return Err(SettingsError::FlatPalette(self.palette_a));
        }
        if self.autopilot_tolerance.is_nan() || self.autopilot_tolerance < 0.0 {
            return Err(SettingsError::AutopilotTolerance(self.autopilot_tolerance));
        }
        Ok(())
    }
}
