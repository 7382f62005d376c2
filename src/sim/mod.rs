//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick(dt)`
//! - No randomness
//! - No rendering, audio or physics-engine dependencies

pub mod align;
pub mod color;
pub mod oscillator;
pub mod piece;
pub mod split;
pub mod state;
pub mod tick;
pub mod tower;

pub use align::{Alignment, evaluate};
pub use color::{Color, ColorCycle, LerpState};
pub use oscillator::{Oscillator, reflect_speed};
pub use piece::{Axis, Piece};
pub use split::{Split, split};
pub use state::{GameCore, GameEvent, GamePhase, TriggerOutcome};
pub use tick::{TickInput, step};
pub use tower::Tower;
