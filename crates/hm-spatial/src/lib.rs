//! `hm-spatial` — hex map, capability traits and generic A* routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`traits`]   | `TileGraph<U>` (tile capability), `PathUnit` (unit capability) |
//! | [`frontier`] | `Frontier<T>` — indexed min-heap with decrease-key         |
//! | [`astar`]    | `Pathfinder` trait, `AstarPathfinder`, `find_path`         |
//! | [`route`]    | `Route<T>` — tile sequence + cumulative turn costs         |
//! | [`map`]      | `HexMap` arena, `HexMapBuilder`, `UniformCost` view        |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on `HexMap` and `Route`.  |
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for all per-search maps.       |

pub mod astar;
pub mod error;
pub mod frontier;
pub mod map;
pub mod route;
pub mod traits;

#[cfg(test)]
mod tests;

pub use astar::{AstarPathfinder, Pathfinder, find_path};
pub use error::{SpatialError, SpatialResult};
pub use frontier::Frontier;
pub use map::{HexMap, HexMapBuilder, UniformCost};
pub use route::Route;
pub use traits::{PathUnit, TileGraph};

#[cfg(feature = "fx-hash")]
pub(crate) type TileMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(feature = "fx-hash")]
pub(crate) type TileSet<K> = rustc_hash::FxHashSet<K>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type TileMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type TileSet<K> = std::collections::HashSet<K>;
