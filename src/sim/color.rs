//! Layer coloring
//!
//! Every new piece takes the next color from a two-color palette. The
//! interpolation parameter `s` ping-pongs over [0, 1], so the stack fades
//! from one palette end to the other and back as it grows.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Clamp tolerance so accumulated float steps land exactly on a bound
const LERP_EPSILON: f32 = 1e-6;

/// Linear RGB color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From 8-bit channels
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Per-channel linear interpolation, `t` = 0 gives `self`
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::from_vec3(self.to_vec3().lerp(other.to_vec3(), t))
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Packed 0xRRGGBB for hosts that want integer colors
    pub fn to_rgb_u32(self) -> u32 {
        let c = |x: f32| (x.clamp(0.0, 1.0) * 255.0).round() as u32;
        (c(self.r) << 16) | (c(self.g) << 8) | c(self.b)
    }
}

/// Interpolation parameter and its current sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LerpState {
    /// Always within [0, 1]
    pub s: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

impl Default for LerpState {
    fn default() -> Self {
        Self {
            s: 0.0,
            direction: 1.0,
        }
    }
}

impl LerpState {
    /// Move `s` one step, reflecting at 0 and 1
    pub fn advance(&mut self, step: f32) {
        self.s += step * self.direction;
        if self.s >= 1.0 - LERP_EPSILON {
            self.s = 1.0;
            self.direction = -1.0;
        } else if self.s <= LERP_EPSILON {
            self.s = 0.0;
            self.direction = 1.0;
        }
    }
}

/// Reflecting palette generator, one color per created piece
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorCycle {
    palette_a: Color,
    palette_b: Color,
    step: f32,
    lerp: LerpState,
}

impl ColorCycle {
    pub fn new(palette_a: Color, palette_b: Color, step: f32) -> Self {
        Self {
            palette_a,
            palette_b,
            step,
            lerp: LerpState::default(),
        }
    }

    /// Advance the parameter and return the color it now points at
    ///
    /// The parameter moves before sampling, so the first color is at
    /// `s = step`, not exactly `palette_a`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Color {
        self.lerp.advance(self.step);
        self.current()
    }

    /// Color at the current parameter without advancing
    pub fn current(&self) -> Color {
        self.palette_a.lerp(self.palette_b, self.lerp.s)
    }

    pub fn state(&self) -> LerpState {
        self.lerp
    }
}
