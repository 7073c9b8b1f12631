//! Movement-entry policy shared by the allocator and the turn loop.
//!
//! The policy decides what happens when a unit does not have enough movement
//! left this turn to pay for the next tile.  It is a configuration value,
//! fixed when the mobility engine is built; every route computed by that
//! engine uses the same rule.

use crate::{CoreError, CoreResult, MAX_MOVEMENT};

/// Rule for entering a tile the unit cannot fully afford this turn.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MovementPolicy {
    /// Only a unit with an untouched turn may enter an unaffordable tile
    /// (spending the whole turn on it).  Otherwise it waits for next turn.
    #[default]
    Strict,
    /// A unit may always enter; doing so uses up the rest of its turn.
    Lenient,
}

impl MovementPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementPolicy::Strict  => "strict",
            MovementPolicy::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for MovementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MovementPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict"  => Ok(MovementPolicy::Strict),
            "lenient" => Ok(MovementPolicy::Lenient),
            other     => Err(CoreError::Parse(format!("unknown movement policy {other:?}"))),
        }
    }
}

/// Movement configuration for a mobility engine.
///
/// Typically embedded in the application's `SimConfig` and loaded from JSON.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementConfig {
    /// Entry rule for unaffordable tiles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: MovementPolicy,

    /// Movement points given to units spawned without an explicit value.
    #[cfg_attr(feature = "serde", serde(default = "default_movement"))]
    pub default_movement: u32,
}

#[cfg(feature = "serde")]
fn default_movement() -> u32 {
    2
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::new(MovementPolicy::default())
    }
}

impl MovementConfig {
    pub fn new(policy: MovementPolicy) -> Self {
        Self { policy, default_movement: 2 }
    }

    /// Reject values the allocator cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.default_movement == 0 || self.default_movement > MAX_MOVEMENT {
            return Err(CoreError::Config(format!(
                "default_movement must be in 1..={MAX_MOVEMENT} (got {})",
                self.default_movement
            )));
        }
        Ok(())
    }
}
