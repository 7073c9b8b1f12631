//! Pathfinding trait and the generic A* implementation.
//!
//! # Pluggability
//!
//! `hm-mobility` calls searches through the [`Pathfinder`] trait, so
//! applications can swap in another search without touching the mobility
//! engine.  The default [`AstarPathfinder`] is plain A*.
//!
//! # Cost units
//!
//! Costs are cumulative turns (`f64`).  The engine never adds edge weights
//! itself: every tentative cost comes from
//! [`TileGraph::aggregate_cost_to_enter`], which receives the cost so far and
//! may apply turn-boundary rules that make the total non-additive.

use hm_core::IMPASSABLE_TURNS;

use crate::{Frontier, Route, SpatialError, SpatialResult, TileGraph, TileMap, TileSet};

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable search engine.
pub trait Pathfinder {
    /// Compute a route from `start` to `destination` for `unit`.
    ///
    /// Returns an empty [`Route`] if `destination` cannot be reached, and
    /// `SpatialError::InvalidArgument` if either tile is not in `graph`.
    fn find_path<G, U, H>(
        &self,
        graph:       &G,
        unit:        &U,
        start:       G::Tile,
        destination: G::Tile,
        heuristic:   H,
    ) -> SpatialResult<Route<G::Tile>>
    where
        G: TileGraph<U>,
        U: ?Sized,
        H: Fn(G::Tile, G::Tile) -> f64;
}

/// A* over any [`TileGraph`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AstarPathfinder;

impl Pathfinder for AstarPathfinder {
    fn find_path<G, U, H>(
        &self,
        graph:       &G,
        unit:        &U,
        start:       G::Tile,
        destination: G::Tile,
        heuristic:   H,
    ) -> SpatialResult<Route<G::Tile>>
    where
        G: TileGraph<U>,
        U: ?Sized,
        H: Fn(G::Tile, G::Tile) -> f64,
    {
        find_path(graph, unit, start, destination, heuristic)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Run A* from `start` to `destination`.
///
/// `heuristic(tile, destination)` must never overestimate the remaining cost
/// for the returned route to be optimal.  All working state is local to the
/// call.
pub fn find_path<G, U, H>(
    graph:       &G,
    unit:        &U,
    start:       G::Tile,
    destination: G::Tile,
    heuristic:   H,
) -> SpatialResult<Route<G::Tile>>
where
    G: TileGraph<U>,
    U: ?Sized,
    H: Fn(G::Tile, G::Tile) -> f64,
{
    if !graph.contains(start) {
        return Err(SpatialError::InvalidArgument(format!("start tile {start:?} is not in the graph")));
    }
    if !graph.contains(destination) {
        return Err(SpatialError::InvalidArgument(format!(
            "destination tile {destination:?} is not in the graph"
        )));
    }

    // Open tiles, keyed by f-score (g + heuristic).
    let mut open: Frontier<G::Tile> = Frontier::new();
    let mut closed: TileSet<G::Tile> = TileSet::default();
    // came_from[t] = tile we stepped from to reach t on the best known route.
    let mut came_from: TileMap<G::Tile, G::Tile> = TileMap::default();
    // g_score[t] = best known cumulative turns to stand on t.
    let mut g_score: TileMap<G::Tile, f64> = TileMap::default();

    g_score.insert(start, 0.0);
    open.insert(start, heuristic(start, destination));

    let mut nbuf = Vec::new();

    while let Some(current) = open.extract_min() {
        if current == destination {
            log::debug!(
                "path {start:?} -> {destination:?} found after expanding {} tiles",
                closed.len() + 1
            );
            return Ok(reconstruct(&came_from, &g_score, current));
        }

        closed.insert(current);
        let current_g = g_score.get(&current).copied().unwrap_or(0.0);

        nbuf.clear();
        graph.neighbors(current, &mut nbuf);

        for &neighbor in nbuf.iter() {
            if closed.contains(&neighbor) {
                continue;
            }

            let tentative = graph.aggregate_cost_to_enter(current_g, current, neighbor, unit);
            if tentative < 0.0 {
                continue;
            }
            if g_score.get(&neighbor).is_some_and(|&known| tentative >= known) {
                continue;
            }

            let f = tentative + heuristic(neighbor, destination);
            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative);
            open.insert_or_update(neighbor, f);
        }
    }

    log::debug!(
        "no path {start:?} -> {destination:?}; expanded {} tiles",
        closed.len()
    );
    Ok(Route::empty())
}

fn reconstruct<T>(came_from: &TileMap<T, T>, g_score: &TileMap<T, f64>, goal: T) -> Route<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    let mut tiles = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        tiles.push(prev);
        cur = prev;
    }
    tiles.reverse();
    Route::from_steps(
        tiles
            .into_iter()
            .map(|t| (t, g_score.get(&t).copied().unwrap_or(IMPASSABLE_TURNS))),
    )
}
