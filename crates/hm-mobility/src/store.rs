//! The `MobilityStore` — per-unit movement state indexed by `UnitId`.

use hm_core::{TileId, UnitId};

use crate::{MobilityError, MobilityResult, UnitState};

/// Holds movement state for every unit.
///
/// `units` is indexed by `UnitId`; ids are handed out densely by
/// [`MobilityStore::push`] and never reused.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobilityStore {
    pub units: Vec<UnitState>,
}

impl MobilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit and return its id.
    pub fn push(&mut self, state: UnitState) -> UnitId {
        let id = UnitId::from_index(self.units.len());
        self.units.push(state);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, unit: UnitId) -> MobilityResult<&UnitState> {
        self.units
            .get(unit.index())
            .ok_or(MobilityError::UnitNotFound(unit))
    }

    pub fn get_mut(&mut self, unit: UnitId) -> MobilityResult<&mut UnitState> {
        self.units
            .get_mut(unit.index())
            .ok_or(MobilityError::UnitNotFound(unit))
    }

    /// All unit ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        (0..self.units.len()).map(UnitId::from_index)
    }

    /// `(id, state)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &UnitState)> + '_ {
        self.units
            .iter()
            .enumerate()
            .map(|(i, s)| (UnitId::from_index(i), s))
    }

    /// Units currently standing on `tile`.
    pub fn units_at(&self, tile: TileId) -> impl Iterator<Item = UnitId> + '_ {
        self.iter()
            .filter(move |(_, s)| s.tile == tile)
            .map(|(id, _)| id)
    }

    /// Restore a full turn of movement to every unit.
    pub fn refresh_all(&mut self) {
        for unit in &mut self.units {
            unit.refresh();
        }
    }
}
