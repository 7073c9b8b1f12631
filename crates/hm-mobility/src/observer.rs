//! Movement notifications.

use hm_core::{TileId, UnitId};

/// A unit stepped from one tile to a neighbour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionChanged {
    pub unit: UnitId,
    pub from: TileId,
    pub to:   TileId,
}

/// Receives one [`PositionChanged`] per tile a unit enters, in travel order.
///
/// Implemented for any `FnMut(&PositionChanged)` closure, so callers can
/// pass `&mut |e| ...` directly.
pub trait MovementObserver {
    fn on_position_changed(&mut self, event: &PositionChanged);
}

impl<F: FnMut(&PositionChanged)> MovementObserver for F {
    fn on_position_changed(&mut self, event: &PositionChanged) {
        self(event)
    }
}

/// Ignores every event.
pub struct NoopMovementObserver;

impl MovementObserver for NoopMovementObserver {
    fn on_position_changed(&mut self, _event: &PositionChanged) {}
}

/// Records every event in order.
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    pub events: Vec<PositionChanged>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles entered, in order.
    pub fn tiles_entered(&self) -> Vec<TileId> {
        self.events.iter().map(|e| e.to).collect()
    }
}

impl MovementObserver for MoveLog {
    fn on_position_changed(&mut self, event: &PositionChanged) {
        self.events.push(*event);
    }
}
