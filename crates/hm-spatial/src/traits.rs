//! Capability contracts between the search engine, tiles and units.
//!
//! The A* engine knows nothing about hexes, terrain or movement points.  It
//! sees a [`TileGraph`]: something that can list a tile's neighbours and
//! price entering one of them for a given unit.  The unit type is a plain
//! type parameter that the engine only passes through, so the pricing rule
//! (including any turn-boundary logic) stays entirely on the graph/unit side.

use std::fmt::Debug;
use std::hash::Hash;

use hm_core::{TileId, Terrain};

/// Tile topology plus entry pricing for units of type `U`.
pub trait TileGraph<U: ?Sized> {
    /// Stable tile identity, used as the key of every search map.
    type Tile: Copy + Eq + Hash + Debug;

    /// `true` if `tile` names a tile of this graph.
    fn contains(&self, tile: Self::Tile) -> bool;

    /// Append the neighbours of `tile` into `buf`.  The caller clears `buf`.
    fn neighbors(&self, tile: Self::Tile, buf: &mut Vec<Self::Tile>);

    /// Cumulative cost, in turns, of standing on `tile` after entering it
    /// from the adjacent `source` with `cost_so_far` already spent.
    ///
    /// Returns a negative value if `unit` cannot enter `tile`.  The result is
    /// not required to be `cost_so_far + w` for any fixed edge weight `w`.
    fn aggregate_cost_to_enter(
        &self,
        cost_so_far: f64,
        source:      Self::Tile,
        tile:        Self::Tile,
        unit:        &U,
    ) -> f64;
}

/// What a unit exposes to the tiles that price its movement.
pub trait PathUnit {
    /// Movement points per turn.  Always > 0.
    fn movement(&self) -> u32;

    /// Points left this turn, in `[0, movement]`.
    fn movement_remaining(&self) -> f64;

    /// Raw points needed to enter `terrain`; negative if impassable.
    fn movement_cost_to_enter(&self, terrain: &Terrain) -> i32;

    /// Cumulative turns after entering `terrain` with `turns_so_far` spent.
    /// Negative if impassable.
    fn aggregate_turns_to_enter(&self, terrain: &Terrain, turns_so_far: f64) -> f64;

    /// Flat per-step cost used by uniform-cost searches.
    fn cost_to_enter_tile(&self, _source: TileId, _destination: TileId) -> f64 {
        1.0
    }
}
