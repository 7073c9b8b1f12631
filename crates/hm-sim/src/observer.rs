//! Simulation observer trait for progress reporting and data collection.

use hm_core::{TileId, Turn, UnitId};
use hm_mobility::PositionChanged;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the turn loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct Arrivals;
///
/// impl SimObserver for Arrivals {
///     fn on_route_complete(&mut self, turn: Turn, unit: UnitId, tile: TileId) {
///         println!("{turn}: {unit} reached {tile}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each turn, before any unit moves.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called once per tile a unit enters, in travel order.
    fn on_unit_moved(&mut self, _turn: Turn, _event: &PositionChanged) {}

    /// Called when a unit reaches the destination of its move order.
    fn on_route_complete(&mut self, _turn: Turn, _unit: UnitId, _tile: TileId) {}

    /// Called when a unit's route is blocked and no new route to its
    /// destination exists.  The order is dropped.
    fn on_order_blocked(&mut self, _turn: Turn, _unit: UnitId, _destination: TileId) {}

    /// Called at the end of each turn.
    ///
    /// `moved` is the number of tiles entered by all units this turn.
    fn on_turn_end(&mut self, _turn: Turn, _moved: usize) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_sim_end(&mut self, _final_turn: Turn) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
