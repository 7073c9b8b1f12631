//! `hm-mobility` — turn-based movement allocation and route execution.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`allocator`] | `MovementAllocator` — strict/lenient turn arithmetic, `Mover`     |
//! | [`state`]     | `UnitState` — tile, movement points, queued route + cursor        |
//! | [`store`]     | `MobilityStore` — `Vec<UnitState>` indexed by `UnitId`            |
//! | [`observer`]  | `PositionChanged`, `MovementObserver`                             |
//! | [`engine`]    | `MobilityEngine<P>` — route planning + per-turn execution         |
//! | [`error`]     | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model
//!
//! 1. `MobilityEngine::plan_route` prices every step with the allocator and
//!    runs a pluggable [`Pathfinder`][hm_spatial::Pathfinder] over the map.
//!    The resulting route records the cumulative turns to reach each tile.
//! 2. `MobilityEngine::execute_movement` first counts how many of the tiles
//!    ahead fit in what is left of the current turn, then steps the unit
//!    through them one at a time, emitting a `PositionChanged` for each.
//! 3. At the end of a turn the costs of the tiles still ahead are shifted
//!    down by one turn and `refresh_movement` restores the unit's points.

pub mod allocator;
pub mod engine;
pub mod error;
pub mod observer;
pub mod state;
pub mod store;


pub use allocator::{MovementAllocator, Mover, StepPlan, TURN_TOLERANCE};
pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use observer::{MoveLog, MovementObserver, NoopMovementObserver, PositionChanged};
pub use state::UnitState;
pub use store::MobilityStore;
