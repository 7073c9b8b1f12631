//! The `Sim` struct and its turn loop.

use std::collections::BTreeMap;

use hm_core::{MovementTraits, TileId, Turn, TurnClock, UnitId};
use hm_mobility::{MobilityEngine, PositionChanged};
use hm_spatial::{HexMap, Pathfinder};

use crate::{SimConfig, SimObserver, SimResult};

/// The turn-based simulation runner.
///
/// `Sim<P>` owns the map, every unit and the outstanding move orders, and
/// drives the turn loop:
///
/// 1. **Move**: each ordered unit, in ascending `UnitId` order, walks as far
///    as its movement allows with `end_of_turn = true`.  A unit that cannot
///    take a single step on a fresh turn is re-routed; if no route exists its
///    order is dropped.
/// 2. **Arrivals**: units that consumed their route have their order
///    completed.
/// 3. **Refresh**: every unit gets a full turn of movement; the clock
///    advances.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder> {
    /// Global configuration (policy, turn limit).
    pub config: SimConfig,

    /// Current turn.
    pub clock: TurnClock,

    /// The hex map.  Terrain may be changed between turns; routes that run
    /// into newly impassable tiles are re-planned.
    pub map: HexMap,

    /// Units, routes and the movement allocator.
    pub mobility: MobilityEngine<P>,

    /// Outstanding move orders: unit → destination.
    pub orders: BTreeMap<UnitId, TileId>,
}

impl<P: Pathfinder> Sim<P> {
    // ── Units and orders ──────────────────────────────────────────────────

    /// Add a unit on `tile` with the configured default movement.
    pub fn spawn_unit(&mut self, tile: TileId, traits: MovementTraits) -> SimResult<UnitId> {
        let movement = self.config.movement.default_movement;
        self.spawn_unit_with_movement(tile, movement, traits)
    }

    pub fn spawn_unit_with_movement(
        &mut self,
        tile:     TileId,
        movement: u32,
        traits:   MovementTraits,
    ) -> SimResult<UnitId> {
        Ok(self.mobility.spawn(tile, movement, traits, &self.map)?)
    }

    /// Order `unit` to move to `destination`.
    ///
    /// Returns `false` (and drops any previous order) if no route exists.
    pub fn order_move(&mut self, unit: UnitId, destination: TileId) -> SimResult<bool> {
        let found = self.mobility.plan_route(unit, destination, &self.map)?;
        if found {
            self.orders.insert(unit, destination);
        } else {
            self.orders.remove(&unit);
        }
        Ok(found)
    }

    pub fn cancel_order(&mut self, unit: UnitId) -> SimResult<()> {
        self.mobility.clear_route(unit)?;
        self.orders.remove(&unit);
        Ok(())
    }

    /// `true` once no move orders are outstanding.
    #[inline]
    pub fn all_orders_complete(&self) -> bool {
        self.orders.is_empty()
    }

    /// Move `unit` mid-turn, spending what movement it has left.  The turn
    /// does not end.
    pub fn step_unit<O: SimObserver>(&mut self, unit: UnitId, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.current;
        let steps = self.mobility.execute_movement(
            unit,
            false,
            &self.map,
            &mut |e: &PositionChanged| observer.on_unit_moved(now, e),
        )?;
        self.complete_if_arrived(now, unit, observer)?;
        Ok(steps)
    }

    // ── Turn loop ─────────────────────────────────────────────────────────

    /// Run turns until every order is complete or `config.max_turns` turns
    /// have been played.  Returns the turn the simulation stopped at.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Turn> {
        while self.clock.current < self.config.end_turn() && !self.all_orders_complete() {
            self.end_turn(observer)?;
        }
        observer.on_sim_end(self.clock.current);
        Ok(self.clock.current)
    }

    /// Play exactly `n` turns from the current position (ignores
    /// `max_turns` and outstanding orders).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_turns<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.end_turn(observer)?;
        }
        Ok(())
    }

    /// Finish the current turn: move every ordered unit, refresh movement and
    /// advance the clock.  Returns the number of tiles entered.
    pub fn end_turn<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.current;
        observer.on_turn_start(now);

        let ordered: Vec<UnitId> = self.orders.keys().copied().collect();
        let mut moved = 0;
        for unit in ordered {
            moved += self.move_unit(now, unit, observer)?;
        }

        self.mobility.refresh_all();
        observer.on_turn_end(now, moved);
        log::debug!("{now}: {moved} tiles entered, {} orders outstanding", self.orders.len());
        self.clock.advance();
        Ok(moved)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn move_unit<O: SimObserver>(&mut self, now: Turn, unit: UnitId, observer: &mut O) -> SimResult<usize> {
        let fresh = {
            let state = self.mobility.unit(unit)?;
            state.movement_remaining >= state.movement as f64
        };

        let mut steps = self.execute(now, unit, observer)?;

        // A full turn of movement and not one step taken: the route is stale.
        if steps == 0 && fresh && self.mobility.unit(unit)?.has_route() {
            let Some(&destination) = self.orders.get(&unit) else {
                return Ok(0);
            };
            log::debug!("{unit} is blocked, re-routing to {destination}");
            if self.mobility.plan_route(unit, destination, &self.map)? {
                steps = self.execute(now, unit, observer)?;
            } else {
                log::warn!("{unit} has no route to {destination}; order dropped");
                self.orders.remove(&unit);
                observer.on_order_blocked(now, unit, destination);
                return Ok(0);
            }
        }

        self.complete_if_arrived(now, unit, observer)?;
        Ok(steps)
    }

    fn execute<O: SimObserver>(&mut self, now: Turn, unit: UnitId, observer: &mut O) -> SimResult<usize> {
        let steps = self.mobility.execute_movement(
            unit,
            true,
            &self.map,
            &mut |e: &PositionChanged| observer.on_unit_moved(now, e),
        )?;
        Ok(steps)
    }

    fn complete_if_arrived<O: SimObserver>(
        &mut self,
        now:      Turn,
        unit:     UnitId,
        observer: &mut O,
    ) -> SimResult<()> {
        let state = self.mobility.unit(unit)?;
        if state.has_route() {
            return Ok(());
        }
        if let Some(destination) = self.orders.remove(&unit) {
            let tile = state.tile;
            if tile == destination {
                observer.on_route_complete(now, unit, tile);
            } else {
                log::warn!("{unit} stopped at {tile} short of {destination}");
            }
        }
        Ok(())
    }
}
