//! The route record shared by the search engine, the movement allocator and
//! anything that draws routes.

use std::hash::Hash;

use crate::TileMap;

/// An ordered tile sequence `[start, …, destination]` plus the cumulative
/// cost, in turns, of standing on each of its tiles.
///
/// Invariants upheld by the search engine:
///
/// - consecutive tiles are neighbours;
/// - costs never decrease along the sequence, and `start` costs 0;
/// - no tile the unit cannot enter appears, except possibly `start`.
///
/// An empty route means "no path exists".
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<T: Copy + Eq + Hash> {
    tiles: Vec<T>,
    turns: TileMap<T, f64>,
}

impl<T: Copy + Eq + Hash> Default for Route<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Copy + Eq + Hash> Route<T> {
    /// The "no path" route.
    pub fn empty() -> Self {
        Self { tiles: Vec::new(), turns: TileMap::default() }
    }

    /// Build a route from `(tile, cumulative_turns)` pairs in travel order.
    pub fn from_steps(steps: impl IntoIterator<Item = (T, f64)>) -> Self {
        let mut route = Self::empty();
        for (tile, turns) in steps {
            route.tiles.push(tile);
            route.turns.insert(tile, turns);
        }
        route
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles, including the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Number of moves needed to walk the route.
    #[inline]
    pub fn steps(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    pub fn start(&self) -> Option<T> {
        self.tiles.first().copied()
    }

    pub fn destination(&self) -> Option<T> {
        self.tiles.last().copied()
    }

    pub fn contains(&self, tile: T) -> bool {
        self.turns.contains_key(&tile)
    }

    /// Position of `tile` in the sequence.
    pub fn position(&self, tile: T) -> Option<usize> {
        if !self.contains(tile) {
            return None;
        }
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Cumulative turns recorded for `tile`, if it is on the route.
    pub fn turns_to(&self, tile: T) -> Option<f64> {
        self.turns.get(&tile).copied()
    }

    /// Whole turns until `tile` is reached: `ceil` of its recorded cost.
    /// A tile reachable this turn reports 1; the start reports 0.
    pub fn turns_until_reached(&self, tile: T) -> Option<u32> {
        self.turns_to(tile).map(|t| t.max(0.0).ceil() as u32)
    }

    /// Recorded cost of the destination, 0 for an empty route.
    pub fn total_turns(&self) -> f64 {
        self.destination()
            .and_then(|t| self.turns_to(t))
            .unwrap_or(0.0)
    }

    /// `(tile, cumulative_turns)` pairs in travel order.
    pub fn iter(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        self.tiles
            .iter()
            .map(move |&t| (t, self.turns.get(&t).copied().unwrap_or(0.0)))
    }

    /// The rest of the route starting at `index`, costs kept as recorded.
    ///
    /// Returns an empty route if `index` is past the end.
    pub fn suffix_from(&self, index: usize) -> Route<T> {
        Route::from_steps(self.iter().skip(index))
    }

    /// Subtract `delta` turns from every tile after `index`, flooring at 0.
    ///
    /// Used at the end of a turn so that tiles still ahead report how many
    /// turns remain from the *new* turn.
    pub fn shift_turns_after(&mut self, index: usize, delta: f64) {
        for tile in self.tiles.iter().skip(index + 1) {
            if let Some(t) = self.turns.get_mut(tile) {
                *t = (*t - delta).max(0.0);
            }
        }
    }
}
