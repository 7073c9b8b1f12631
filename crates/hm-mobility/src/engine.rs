//! High-level mobility engine: plans routes and walks units along them.

use hm_core::{IMPASSABLE_RAW, MAX_MOVEMENT, MovementConfig, MovementTraits, TileId, UnitId};
use hm_spatial::{HexMap, Pathfinder, Route};

use crate::{
    MobilityError, MobilityResult, MobilityStore, MovementAllocator, MovementObserver, Mover,
    PositionChanged, UnitState,
};

/// Wraps a [`Pathfinder`], a [`MovementAllocator`] and the [`MobilityStore`].
///
/// # Type parameter
///
/// `P` must implement [`Pathfinder`] (e.g. [`hm_spatial::AstarPathfinder`]).
/// Swap it at compile time for a different search with no runtime overhead.
pub struct MobilityEngine<P: Pathfinder> {
    /// The search algorithm.
    pub pathfinder: P,

    /// Turn arithmetic shared by route planning and execution.
    pub allocator: MovementAllocator,

    /// All per-unit movement state.
    pub store: MobilityStore,
}

impl<P: Pathfinder> MobilityEngine<P> {
    pub fn new(pathfinder: P, config: &MovementConfig) -> Self {
        Self {
            pathfinder,
            allocator: MovementAllocator::new(config.policy),
            store: MobilityStore::new(),
        }
    }

    // ── Units ─────────────────────────────────────────────────────────────────

    /// Add a unit standing on `tile` with a full turn of movement.
    pub fn spawn(
        &mut self,
        tile:     TileId,
        movement: u32,
        traits:   MovementTraits,
        map:      &HexMap,
    ) -> MobilityResult<UnitId> {
        if movement == 0 || movement > MAX_MOVEMENT {
            return Err(MobilityError::InvalidMovement(movement));
        }
        if map.terrain(tile).is_none() {
            return Err(MobilityError::TileNotFound(tile));
        }
        let id = self.store.push(UnitState::new(tile, movement, traits));
        log::debug!("spawned {id} on {tile} with {movement} movement");
        Ok(id)
    }

    /// Teleport `unit` to `tile`, dropping any queued route.
    pub fn place(&mut self, unit: UnitId, tile: TileId, map: &HexMap) -> MobilityResult<()> {
        if map.terrain(tile).is_none() {
            return Err(MobilityError::TileNotFound(tile));
        }
        let state = self.store.get_mut(unit)?;
        state.tile = tile;
        state.clear_route();
        Ok(())
    }

    #[inline]
    pub fn unit(&self, unit: UnitId) -> MobilityResult<&UnitState> {
        self.store.get(unit)
    }

    #[inline]
    pub fn tile_of(&self, unit: UnitId) -> MobilityResult<TileId> {
        Ok(self.store.get(unit)?.tile)
    }

    #[inline]
    pub fn movement_remaining(&self, unit: UnitId) -> MobilityResult<f64> {
        Ok(self.store.get(unit)?.movement_remaining)
    }

    // ── Routes ────────────────────────────────────────────────────────────────

    /// Search for a route from `unit`'s tile to `destination` without
    /// touching the unit's queue.
    ///
    /// Costs are priced by the engine's allocator.  An empty route means no
    /// path exists.
    pub fn find_route(
        &self,
        unit:        UnitId,
        destination: TileId,
        map:         &HexMap,
    ) -> MobilityResult<Route<TileId>> {
        let state = self.store.get(unit)?;
        let mover = Mover { unit: state, allocator: self.allocator };
        // Every passable tile costs at least one point.
        let heuristic = map.turn_heuristic(1.0 / state.movement as f64);
        let route = self
            .pathfinder
            .find_path(map, &mover, state.tile, destination, heuristic)?;
        Ok(route)
    }

    /// Search for a route and queue it on `unit`.
    ///
    /// If no path exists the unit's queue is cleared and `Ok(false)` is
    /// returned.
    pub fn plan_route(
        &mut self,
        unit:        UnitId,
        destination: TileId,
        map:         &HexMap,
    ) -> MobilityResult<bool> {
        let route = self.find_route(unit, destination, map)?;
        let found = !route.is_empty();
        if found {
            log::debug!(
                "{unit} routed to {destination}: {} steps, {:.2} turns",
                route.steps(),
                route.total_turns()
            );
        } else {
            log::debug!("{unit} has no route to {destination}");
        }
        self.set_route(unit, route, map)?;
        Ok(found)
    }

    /// Queue an externally built route.  An empty route clears the queue.
    ///
    /// # Errors
    ///
    /// [`MobilityError::RouteMismatch`] if a non-empty route does not start
    /// on the tile the unit stands on, [`MobilityError::TileNotFound`] if a
    /// tile is off `map` and [`MobilityError::RouteNotContiguous`] if two
    /// consecutive tiles are not neighbours.
    pub fn set_route(&mut self, unit: UnitId, route: Route<TileId>, map: &HexMap) -> MobilityResult<()> {
        if let Some(&off) = route.tiles().iter().find(|&&t| map.terrain(t).is_none()) {
            return Err(MobilityError::TileNotFound(off));
        }
        if let Some(pair) = route.tiles().windows(2).find(|p| map.distance(p[0], p[1]) != 1) {
            return Err(MobilityError::RouteNotContiguous { unit, from: pair[0], to: pair[1] });
        }

        let state = self.store.get_mut(unit)?;
        if route.is_empty() {
            state.clear_route();
            return Ok(());
        }
        if route.start() != Some(state.tile) {
            return Err(MobilityError::RouteMismatch {
                unit,
                unit_tile:   state.tile,
                route_start: route.start(),
            });
        }
        state.route = Some(route);
        state.cursor = 0;
        Ok(())
    }

    pub fn clear_route(&mut self, unit: UnitId) -> MobilityResult<()> {
        self.store.get_mut(unit)?.clear_route();
        Ok(())
    }

    /// The not yet walked part of `unit`'s route, starting at its current
    /// tile.  `None` if nothing is queued.
    pub fn remaining_route(&self, unit: UnitId) -> MobilityResult<Option<Route<TileId>>> {
        let state = self.store.get(unit)?;
        Ok(state
            .route
            .as_ref()
            .filter(|_| state.has_route())
            .map(|r| r.suffix_from(state.cursor)))
    }

    pub fn destination(&self, unit: UnitId) -> MobilityResult<Option<TileId>> {
        Ok(self.store.get(unit)?.destination())
    }

    // ── Movement ──────────────────────────────────────────────────────────────

    /// Walk `unit` along its queued route as far as its remaining movement
    /// allows this turn, notifying `observer` once per tile entered.
    ///
    /// With `end_of_turn` set the turn is over once the unit stops: every
    /// tile still ahead on the route has one turn subtracted from its cost.
    /// Movement points are not restored here; see
    /// [`MobilityEngine::refresh_movement`].
    ///
    /// Returns the number of tiles entered.  A unit with nothing queued is
    /// left untouched; one with no movement left enters no tiles.
    pub fn execute_movement<O>(
        &mut self,
        unit:        UnitId,
        end_of_turn: bool,
        map:         &HexMap,
        observer:    &mut O,
    ) -> MobilityResult<usize>
    where
        O: MovementObserver + ?Sized,
    {
        let allocator = self.allocator;
        let state = self.store.get_mut(unit)?;
        if !state.has_route() {
            state.clear_route();
            return Ok(0);
        }
        let Some(route) = state.route.as_ref() else {
            return Ok(0);
        };

        // Phase 1: decide how far the unit gets.
        let ahead = &route.tiles()[state.cursor + 1..];
        let costs = ahead.iter().map(|&t| match map.terrain(t) {
            Some(terrain) => state.movement_cost_to_enter(terrain),
            None => IMPASSABLE_RAW,
        });
        let plan = allocator.plan_steps(state.movement, state.movement_remaining, costs);
        let entered: Vec<TileId> = ahead[..plan.steps].to_vec();

        // Phase 2: move.
        for to in entered {
            let from = state.tile;
            state.tile = to;
            state.cursor += 1;
            log::trace!("{unit} {from} -> {to}");
            observer.on_position_changed(&PositionChanged { unit, from, to });
        }

        let spent = plan.turns_spent * state.movement as f64;
        state.movement_remaining = (state.movement_remaining - spent).clamp(0.0, state.movement as f64);
        if state.movement_remaining < 1e-9 {
            state.movement_remaining = 0.0;
        }

        if end_of_turn {
            let cursor = state.cursor;
            if let Some(route) = state.route.as_mut() {
                route.shift_turns_after(cursor, 1.0);
            }
        }

        if !state.has_route() {
            log::debug!("{unit} arrived at {}", state.tile);
            state.clear_route();
        }

        Ok(plan.steps)
    }

    /// Restore a full turn of movement to `unit`.
    pub fn refresh_movement(&mut self, unit: UnitId) -> MobilityResult<()> {
        self.store.get_mut(unit)?.refresh();
        Ok(())
    }

    /// Restore a full turn of movement to every unit.
    pub fn refresh_all(&mut self) {
        self.store.refresh_all();
    }
}
