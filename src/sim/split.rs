//! Cutting the mover into the retained layer and the falling debris

use serde::{Deserialize, Serialize};

use super::align::Alignment;
use super::piece::{Axis, Piece};

/// Output of a cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Overlapping part, becomes the new top
    pub retained: Piece,
    /// Overhanging part; `None` for a perfect placement
    pub debris: Option<Piece>,
}

/// Cut `mover` against `top` along `axis`
///
/// The retained piece is centered on the midpoint of the overlap. The debris
/// sits flush against the outer edge of the overlap on the overshoot side and
/// keeps the mover's position on the other axes.
pub fn split(mover: &Piece, top: &Piece, alignment: &Alignment, axis: Axis) -> Split {
    let Alignment { hangover, sign, .. } = *alignment;
    let cut = hangover.abs();
    let top_center = top.center_along(axis);
    let mover_size = mover.size_along(axis);

    let mut retained = *mover;
    retained.size = axis.with_component(mover.size, mover_size - cut);
    retained.center = axis.with_component(mover.center, top_center + hangover / 2.0);

    let debris = (cut > 0.0).then(|| {
        let mut debris = *mover;
        debris.size = axis.with_component(mover.size, cut);
        debris.center = axis.with_component(
            mover.center,
            top_center + sign * top.size_along(axis) / 2.0 + hangover / 2.0,
        );
        debris
    });

    Split { retained, debris }
}
