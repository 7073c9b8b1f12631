//! Simulation configuration.

use hm_core::{MovementConfig, Turn};

use crate::{SimError, SimResult};

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Movement policy and the default movement points for new units.
    pub movement: MovementConfig,

    /// Upper bound on turns played by [`Sim::run`][crate::Sim::run], even if
    /// orders are still outstanding.  Default: 100.
    pub max_turns: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            movement:  MovementConfig::default(),
            max_turns: 100,
        }
    }
}

impl SimConfig {
    /// The turn at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_turn(&self) -> Turn {
        Turn(self.max_turns)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.movement
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;
        if self.max_turns == 0 {
            return Err(SimError::Config("max_turns must be > 0".into()));
        }
        Ok(())
    }
}
