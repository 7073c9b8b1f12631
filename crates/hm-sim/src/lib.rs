//! `hm-sim` — turn loop orchestrator for the hexmarch movement engine.
//!
//! # Turn loop
//!
//! ```text
//! for turn in 0..config.max_turns (or until no orders remain):
//!   ① Move      — each ordered unit, ascending UnitId, executes its route
//!                 with end_of_turn = true; costs ahead shift down one turn.
//!   ② Re-route  — a unit that cannot step on a fresh turn re-plans; with no
//!                 route left its order is dropped.
//!   ③ Arrivals  — units at their destination complete their order.
//!   ④ Refresh   — every unit regains its full movement; the clock advances.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | Serde derives on `SimConfig` and the types it contains. |
//! | `fx-hash` | FxHash for the search's score and back-pointer maps.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hm_core::{MovementTraits, TileId, UnitId};
//! use hm_sim::{NoopObserver, SimBuilder, SimConfig};
//! use hm_spatial::{AstarPathfinder, HexMapBuilder};
//!
//! let map = HexMapBuilder::new(16, 16).build()?;
//! let mut sim = SimBuilder::new(SimConfig::default(), map, AstarPathfinder)
//!     .unit(TileId(0), MovementTraits::FOOT)
//!     .build()?;
//! sim.order_move(UnitId(0), TileId(200))?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
