//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use hm_core::{MovementTraits, TileId, TurnClock};
use hm_mobility::MobilityEngine;
use hm_spatial::{HexMap, Pathfinder};

use crate::{Sim, SimConfig, SimResult};

/// A unit to place before the first turn.
struct PendingUnit {
    tile:     TileId,
    movement: Option<u32>,
    traits:   MovementTraits,
}

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — policy, default movement, turn limit
/// - [`HexMap`] — from [`hm_spatial::HexMapBuilder`]
/// - `P: Pathfinder` — the search algorithm (e.g. [`hm_spatial::AstarPathfinder`])
///
/// # Optional inputs
///
/// | Method                          | Default                          |
/// |---------------------------------|----------------------------------|
/// | `.unit(tile, traits)`           | no units                         |
/// | `.unit_with_movement(t, m, tr)` | no units                         |
///
/// Units get ids in the order they are added, starting at `UnitId(0)`.
///
/// # Example
///
/// ```rust,ignore
/// let map = HexMapBuilder::new(20, 12).build()?;
/// let mut sim = SimBuilder::new(config, map, AstarPathfinder)
///     .unit(TileId(0), MovementTraits::FOOT)
///     .build()?;
/// sim.order_move(UnitId(0), TileId(42))?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Pathfinder> {
    config:     SimConfig,
    map:        HexMap,
    pathfinder: P,
    units:      Vec<PendingUnit>,
}

impl<P: Pathfinder> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, map: HexMap, pathfinder: P) -> Self {
        Self { config, map, pathfinder, units: Vec::new() }
    }

    /// Add a unit with the configured default movement.
    pub fn unit(mut self, tile: TileId, traits: MovementTraits) -> Self {
        self.units.push(PendingUnit { tile, movement: None, traits });
        self
    }

    pub fn unit_with_movement(mut self, tile: TileId, movement: u32, traits: MovementTraits) -> Self {
        self.units.push(PendingUnit { tile, movement: Some(movement), traits });
        self
    }

    /// Validate the configuration, place every unit and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let mut mobility = MobilityEngine::new(self.pathfinder, &self.config.movement);
        for unit in &self.units {
            let movement = unit.movement.unwrap_or(self.config.movement.default_movement);
            mobility.spawn(unit.tile, movement, unit.traits, &self.map)?;
        }
        log::info!(
            "sim ready: {}x{} map, {} units, {} policy",
            self.map.width(),
            self.map.height(),
            mobility.store.len(),
            self.config.movement.policy
        );

        Ok(Sim {
            clock:    TurnClock::new(),
            config:   self.config,
            map:      self.map,
            mobility,
            orders:   BTreeMap::new(),
        })
    }
}
