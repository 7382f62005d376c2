//! Game state and core simulation types
//!
//! One [`GameCore`] owns everything a run needs. There are no globals, so
//! any number of independent games can run side by side.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::color::ColorCycle;
use super::oscillator::Oscillator;
use super::piece::{Axis, Piece};
use super::tower::Tower;
use crate::settings::{Settings, SettingsError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mover sweeping, triggers accepted
    #[default]
    Running,
    /// Run ended; terminal until restart
    GameOver,
}

/// Notifications for the host (rendering, audio, physics)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A layer was committed to the tower
    PiecePlaced { piece: Piece },
    /// A piece left the simulation; the host's physics owns it from here
    DebrisSpawned { piece: Piece, velocity: Vec3 },
    /// Run ended
    GameOver { final_score: u64 },
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TriggerOutcome {
    /// Mover was cut and placed
    Placed {
        score: u64,
        hangover: f32,
        debris: Option<Piece>,
    },
    /// Mover missed the tower entirely
    GameOver { final_score: u64 },
    /// Game already over
    Ignored,
}

impl TriggerOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TriggerOutcome::GameOver { .. })
    }
}

/// Complete game state
///
/// Serialize-only so hosts can snapshot a run; a game can only be built
/// through [`GameCore::new`], which validates its settings.
#[derive(Debug, Clone, Serialize)]
pub struct GameCore {
    pub(crate) settings: Settings,
    pub(crate) tower: Tower,
    /// `None` once the run is over and the mover was dropped
    pub(crate) mover: Option<Piece>,
    pub(crate) oscillator: Oscillator,
    pub(crate) colors: ColorCycle,
    /// Axis of the current round
    pub(crate) axis: Axis,
    pub(crate) score: u64,
    pub(crate) phase: GamePhase,
    /// Pending notifications (drained by the host)
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameCore {
    /// Validate `settings`, seed the pedestal and spawn the first mover
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut colors = ColorCycle::new(settings.palette_a, settings.palette_b, settings.lerp_step);
        let tower = seed_tower(&settings, &mut colors);
        let axis = Axis::default();
        let mover = spawn_mover(tower.top(), axis, &settings, &mut colors);
        let oscillator = Oscillator::new(settings.nominal_speed, settings.oscillator_bound, axis);

        log::info!(
            "Game started: {} pedestal layers, first mover along {:?}",
            tower.len(),
            axis
        );

        Ok(Self {
            settings,
            tower,
            mover: Some(mover),
            oscillator,
            colors,
            axis,
            score: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
        })
    }

    /// Throw away the current run and start over with the same settings
    pub fn restart(&mut self) {
        let mut colors = ColorCycle::new(
            self.settings.palette_a,
            self.settings.palette_b,
            self.settings.lerp_step,
        );
        let tower = seed_tower(&self.settings, &mut colors);
        let axis = Axis::default();
        let mover = spawn_mover(tower.top(), axis, &self.settings, &mut colors);

        log::info!("Game restarted (previous score {})", self.score);

        self.tower = tower;
        self.mover = Some(mover);
        self.oscillator.reset(axis);
        self.colors = colors;
        self.axis = axis;
        self.score = 0;
        self.phase = GamePhase::Running;
        self.events.clear();
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Axis the mover is currently sweeping along
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn mover(&self) -> Option<&Piece> {
        self.mover.as_ref()
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Copy of every placed piece, bottom first
    pub fn tower_snapshot(&self) -> Vec<Piece> {
        self.tower.iter().copied().collect()
    }

    /// Copy of the in-flight piece, if the run is still going
    pub fn mover_snapshot(&self) -> Option<Piece> {
        self.mover
    }

    /// Signed offset of the mover from the top along the active axis
    pub fn hangover(&self) -> Option<f32> {
        let top = self.tower.top();
        self.mover
            .map(|m| m.center_along(self.axis) - top.center_along(self.axis))
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Build the pedestal: `seed_layer_count` decorative layers plus the base
/// piece on top at `y = -layer_offset`, each colored bottom-up
fn seed_tower(settings: &Settings, colors: &mut ColorCycle) -> Tower {
    let size = Vec3::new(
        settings.base_size.x,
        settings.layer_thickness,
        settings.base_size.y,
    );
    let layer = |depth: usize, colors: &mut ColorCycle| {
        let y = -settings.layer_offset * (depth as f32 + 1.0);
        Piece::new(Vec3::new(0.0, y, 0.0), size, Axis::default(), colors.next())
    };

    let mut tower = Tower::new(layer(settings.seed_layer_count, &mut *colors));
    for depth in (0..settings.seed_layer_count).rev() {
        tower.push(layer(depth, &mut *colors));
    }
    tower
}

/// New mover one layer above `top`, pulled back along `axis`
pub(crate) fn spawn_mover(
    top: &Piece,
    axis: Axis,
    settings: &Settings,
    colors: &mut ColorCycle,
) -> Piece {
    let center =
        top.center + Vec3::Y * settings.layer_offset - axis.unit() * settings.spawn_distance;
    Piece::new(center, top.size, axis, colors.next())
}
