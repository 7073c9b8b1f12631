//! Hex map arena and builder.
//!
//! # Data layout
//!
//! A map is a `width × height` parallelogram of axial coordinates: column
//! `q ∈ [0, width)`, row `r ∈ [0, height)`.  Tiles live in one `Vec` indexed
//! by `TileId = r * width + q`, so a `TileId` is a stable, hashable identity
//! for the lifetime of the map and can be turned back into a coordinate in
//! O(1).
//!
//! Maps may wrap east-west: stepping off column `width - 1` lands on column
//! 0 of the same row.  Rows never wrap.

use hm_core::{HexCoord, Terrain, TileId};

use crate::{PathUnit, SpatialError, SpatialResult, TileGraph};

// ── HexMap ────────────────────────────────────────────────────────────────────

/// A rectangular hex map owning the terrain of every tile.
///
/// Do not construct directly; use [`HexMapBuilder`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexMap {
    width:          u32,
    height:         u32,
    wrap_east_west: bool,
    /// Terrain of each tile, indexed by `TileId`.
    terrain:        Vec<Terrain>,
}

impl HexMap {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn wraps_east_west(&self) -> bool {
        self.wrap_east_west
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.terrain.len()
    }

    /// Iterator over every tile id in index order.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.terrain.len() as u32).map(TileId)
    }

    /// The tile at `coord`, wrapping `q` on wrapping maps.
    pub fn tile_at(&self, coord: HexCoord) -> Option<TileId> {
        let w = self.width as i32;
        let q = if self.wrap_east_west { coord.q.rem_euclid(w) } else { coord.q };
        if q < 0 || q >= w || coord.r < 0 || coord.r >= self.height as i32 {
            return None;
        }
        Some(TileId(coord.r as u32 * self.width + q as u32))
    }

    /// Axial coordinate of `tile`.
    ///
    /// # Panics
    /// Panics if `tile` is not on this map.
    pub fn coord(&self, tile: TileId) -> HexCoord {
        assert!(tile.index() < self.terrain.len(), "{tile} is not on this map");
        HexCoord::new((tile.0 % self.width) as i32, (tile.0 / self.width) as i32)
    }

    pub fn terrain(&self, tile: TileId) -> Option<&Terrain> {
        self.terrain.get(tile.index())
    }

    /// Replace the terrain of `tile`.
    pub fn set_terrain(&mut self, tile: TileId, terrain: Terrain) -> SpatialResult<()> {
        let slot = self.terrain.get_mut(tile.index()).ok_or_else(|| {
            SpatialError::InvalidArgument(format!("{tile} is not on this map"))
        })?;
        *slot = terrain;
        Ok(())
    }

    /// Tile steps between two tiles, taking east-west wrap into account.
    pub fn distance(&self, a: TileId, b: TileId) -> u32 {
        let wrap = self.wrap_east_west.then_some(self.width);
        self.coord(a).wrapped_distance(self.coord(b), wrap)
    }

    /// Admissible A* heuristic measured in turns.
    ///
    /// Every step costs at least `min_turns_per_step` turns (for a unit with
    /// `movement` points and raw costs ≥ 1 that is `1 / movement`), so the
    /// tile distance scaled by it never overestimates.
    pub fn turn_heuristic(&self, min_turns_per_step: f64) -> impl Fn(TileId, TileId) -> f64 + '_ {
        move |a, b| self.distance(a, b) as f64 * min_turns_per_step
    }

    /// View of this map where every step costs the unit's flat
    /// [`PathUnit::cost_to_enter_tile`] and only impassable terrain blocks.
    pub fn uniform_cost(&self) -> UniformCost<'_> {
        UniformCost { map: self }
    }

    fn push_neighbors(&self, tile: TileId, buf: &mut Vec<TileId>) {
        if tile.index() >= self.terrain.len() {
            return;
        }
        let origin = self.coord(tile);
        for n in origin.neighbors() {
            if let Some(id) = self.tile_at(n) {
                // A 1- or 2-column wrapping map can see itself or the same
                // neighbour twice.
                if id != tile && !buf.contains(&id) {
                    buf.push(id);
                }
            }
        }
    }
}

impl<U: PathUnit + ?Sized> TileGraph<U> for HexMap {
    type Tile = TileId;

    #[inline]
    fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.terrain.len()
    }

    fn neighbors(&self, tile: TileId, buf: &mut Vec<TileId>) {
        self.push_neighbors(tile, buf);
    }

    fn aggregate_cost_to_enter(
        &self,
        cost_so_far: f64,
        _source:     TileId,
        tile:        TileId,
        unit:        &U,
    ) -> f64 {
        match self.terrain(tile) {
            Some(terrain) => unit.aggregate_turns_to_enter(terrain, cost_so_far),
            None => hm_core::IMPASSABLE_TURNS,
        }
    }
}

// ── UniformCost ───────────────────────────────────────────────────────────────

/// A [`HexMap`] priced by [`PathUnit::cost_to_enter_tile`] instead of turns.
///
/// Searches over it minimise step count (for the default cost of 1) while
/// still refusing terrain the unit cannot enter.
#[derive(Clone, Copy)]
pub struct UniformCost<'a> {
    map: &'a HexMap,
}

impl<U: PathUnit + ?Sized> TileGraph<U> for UniformCost<'_> {
    type Tile = TileId;

    fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.map.tile_count()
    }

    fn neighbors(&self, tile: TileId, buf: &mut Vec<TileId>) {
        self.map.push_neighbors(tile, buf);
    }

    fn aggregate_cost_to_enter(
        &self,
        cost_so_far: f64,
        source:      TileId,
        tile:        TileId,
        unit:        &U,
    ) -> f64 {
        match self.map.terrain(tile) {
            Some(terrain) if unit.movement_cost_to_enter(terrain) >= 0 => {
                cost_so_far + unit.cost_to_enter_tile(source, tile)
            }
            _ => hm_core::IMPASSABLE_TURNS,
        }
    }
}

// ── HexMapBuilder ─────────────────────────────────────────────────────────────

/// Incremental builder for [`HexMap`].
///
/// ```rust,ignore
/// let mut b = HexMapBuilder::new(8, 6).wrap_east_west(true);
/// b.set_terrain(HexCoord::new(3, 2), Terrain::MOUNTAIN)?;
/// let map = b.build()?;
/// ```
#[derive(Debug, Clone)]
pub struct HexMapBuilder {
    width:          u32,
    height:         u32,
    wrap_east_west: bool,
    fill:           Terrain,
    overrides:      Vec<(HexCoord, Terrain)>,
}

impl HexMapBuilder {
    /// A `width × height` map of flat terrain.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            wrap_east_west: false,
            fill:           Terrain::FLAT,
            overrides:      Vec::new(),
        }
    }

    pub fn wrap_east_west(mut self, wrap: bool) -> Self {
        self.wrap_east_west = wrap;
        self
    }

    /// Terrain for every tile not explicitly set.
    pub fn fill(mut self, terrain: Terrain) -> Self {
        self.fill = terrain;
        self
    }

    /// Set the terrain at `coord`.  Later calls for the same coordinate win.
    pub fn set_terrain(&mut self, coord: HexCoord, terrain: Terrain) -> SpatialResult<&mut Self> {
        let in_rows = coord.r >= 0 && (coord.r as u32) < self.height;
        let in_cols = coord.q >= 0 && (coord.q as u32) < self.width;
        if !in_rows || !in_cols {
            return Err(SpatialError::OffMap(coord));
        }
        self.overrides.push((coord, terrain));
        Ok(self)
    }

    /// Validate dimensions and produce the map.
    pub fn build(self) -> SpatialResult<HexMap> {
        let count = (self.width as u64) * (self.height as u64);
        if self.width == 0 || self.height == 0 || count >= u32::MAX as u64 {
            return Err(SpatialError::BadDimensions { width: self.width, height: self.height });
        }
        let mut terrain = vec![self.fill; count as usize];
        for (coord, t) in self.overrides {
            terrain[(coord.r as u32 * self.width + coord.q as u32) as usize] = t;
        }
        log::debug!(
            "built {}x{} hex map ({} tiles, wrap_east_west = {})",
            self.width,
            self.height,
            terrain.len(),
            self.wrap_east_west,
        );
        Ok(HexMap {
            width: self.width,
            height: self.height,
            wrap_east_west: self.wrap_east_west,
            terrain,
        })
    }
}
