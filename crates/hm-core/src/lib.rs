//! `hm-core` — foundational types for the `hexmarch` movement engine.
//!
//! This crate is a dependency of every other `hm-*` crate.  It intentionally
//! has no `hm-*` dependencies and minimal external ones (only `log` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TileId`, `UnitId`                                    |
//! | [`hex`]         | `HexCoord` (axial), cube distance with wrap-around    |
//! | [`terrain`]     | `Terrain`, `MovementTraits`, base movement costs      |
//! | [`turns`]       | `Turn`, `TurnClock`, `split_turns` drift correction   |
//! | [`policy`]      | `MovementPolicy`, `MovementConfig`                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod hex;
pub mod ids;
pub mod policy;
pub mod terrain;
pub mod turns;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use hex::HexCoord;
pub use ids::{TileId, UnitId};
pub use policy::{MovementConfig, MovementPolicy};
pub use terrain::{Elevation, Feature, IMPASSABLE_RAW, MovementTraits, Terrain};
pub use turns::{DRIFT_SNAP, IMPASSABLE_TURNS, MAX_MOVEMENT, Turn, TurnClock, split_turns};
