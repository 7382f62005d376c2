//! The stack of placed layers
//!
//! Insertion order is stacking order: index 0 is the bottom of the pedestal,
//! the last entry is the top that the mover is measured against.

use glam::Vec3;
use serde::Serialize;

use super::piece::Piece;

/// Ordered, never-empty stack of placed pieces
///
/// The top is held apart from the layers beneath it, so there is always one
/// to measure against. Serialize-only: there is no way to rebuild a tower
/// that skips [`Tower::new`].
#[derive(Debug, Clone, Serialize)]
pub struct Tower {
    /// Bottom first
    below: Vec<Piece>,
    top: Piece,
}

impl Tower {
    /// Start a tower from its bottom piece
    pub fn new(base: Piece) -> Self {
        Self {
            below: Vec::new(),
            top: base,
        }
    }

    /// Current top (alignment reference)
    pub fn top(&self) -> &Piece {
        &self.top
    }

    /// Place a piece on top
    pub fn push(&mut self, piece: Piece) {
        let previous = std::mem::replace(&mut self.top, piece);
        self.below.push(previous);
    }

    /// Translate every placed piece by `offset`
    pub fn shift(&mut self, offset: Vec3) {
        for piece in self.below.iter_mut().chain(std::iter::once(&mut self.top)) {
            piece.center += offset;
        }
    }

    /// Every piece, bottom first
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.below.iter().chain(std::iter::once(&self.top))
    }

    pub fn len(&self) -> usize {
        self.below.len() + 1
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when every piece sits `layer_offset` above the one below it
    pub fn is_evenly_stacked(&self, layer_offset: f32) -> bool {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(lower, upper)| ((upper.center.y - lower.center.y) - layer_offset).abs() < 1e-4)
    }
}
