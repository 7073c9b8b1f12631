//! Per-unit movement state.

use hm_core::{MovementTraits, Terrain, TileId};
use hm_spatial::Route;

/// The movement state for a single unit.
///
/// A unit either stands idle on `tile` (`route == None`) or has a queued
/// route whose tile at index `cursor` is the one it currently stands on.
/// The route itself is never trimmed as the unit walks; the cursor records
/// how much of it has been consumed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    /// Tile the unit stands on.
    pub tile: TileId,

    /// Movement points per turn, in `1..=MAX_MOVEMENT`.
    pub movement: u32,

    /// Points left this turn, in `[0, movement]`.
    pub movement_remaining: f64,

    /// Terrain abilities.
    pub traits: MovementTraits,

    /// Queued route, if any.  `route.start()` was `tile` when it was set.
    pub route: Option<Route<TileId>>,

    /// Index of `tile` within `route`.
    pub cursor: usize,
}

impl UnitState {
    /// A unit standing on `tile` with a full turn of movement.
    pub fn new(tile: TileId, movement: u32, traits: MovementTraits) -> Self {
        Self {
            tile,
            movement,
            movement_remaining: movement as f64,
            traits,
            route: None,
            cursor: 0,
        }
    }

    /// Raw points this unit pays to enter `terrain`; negative if impassable.
    #[inline]
    pub fn movement_cost_to_enter(&self, terrain: &Terrain) -> i32 {
        terrain.base_movement_cost(self.traits)
    }

    /// `true` while the unit still has tiles left to walk.
    pub fn has_route(&self) -> bool {
        self.route
            .as_ref()
            .is_some_and(|r| self.cursor + 1 < r.len())
    }

    /// Final tile of the queued route.
    pub fn destination(&self) -> Option<TileId> {
        self.route.as_ref().and_then(Route::destination)
    }

    /// The next tile the unit will enter.
    pub fn next_tile(&self) -> Option<TileId> {
        self.route
            .as_ref()
            .and_then(|r| r.tiles().get(self.cursor + 1).copied())
    }

    /// Number of tiles still to enter.
    pub fn steps_remaining(&self) -> usize {
        self.route
            .as_ref()
            .map_or(0, |r| r.len().saturating_sub(self.cursor + 1))
    }

    #[inline]
    pub fn has_movement(&self) -> bool {
        self.movement_remaining > 0.0
    }

    /// Restore a full turn of movement.
    #[inline]
    pub fn refresh(&mut self) {
        self.movement_remaining = self.movement as f64;
    }

    /// Drop the queued route.
    pub fn clear_route(&mut self) {
        self.route = None;
        self.cursor = 0;
    }
}
