//! Stack Tower - simulation core of a stack-the-block arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (oscillation, alignment, splitting, tower state)
//! - `settings`: Construction-time configuration and validation
//!
//! Rendering, audio, input polling and debris physics live in the host; the
//! core talks to them through [`sim::GameEvent`] and snapshot accessors.

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{GameCore, GameEvent, GamePhase, Piece, TriggerOutcome};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Footprint of the pedestal pieces (x, z)
    pub const BASE_SIZE: (f32, f32) = (1.0, 1.0);
    /// Vertical extent shared by every piece
    pub const LAYER_THICKNESS: f32 = 0.1;
    /// Vertical spacing between consecutive tower layers
    pub const LAYER_OFFSET: f32 = 0.1;
    /// How far back along the active axis a new mover spawns
    pub const SPAWN_DISTANCE: f32 = 2.0;

    /// Overshoot past the top piece before the mover turns around
    pub const OSCILLATOR_BOUND: f32 = 1.2;
    /// Mover speed at the start of every round (units/s)
    pub const NOMINAL_SPEED: f32 = 1.5;

    /// Interpolation step per colored piece
    pub const LERP_STEP: f32 = 0.1;
    /// Dark green
    pub const PALETTE_A: [u8; 3] = [39, 90, 43];
    /// Bright yellow
    pub const PALETTE_B: [u8; 3] = [250, 250, 76];

    /// Decorative pedestal layers below the base piece
    pub const SEED_LAYER_COUNT: usize = 10;

    /// Hangover within which the autopilot fires the trigger
    pub const AUTOPILOT_TOLERANCE: f32 = 0.05;
}
