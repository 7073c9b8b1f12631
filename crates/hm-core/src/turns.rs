//! Turn counting and fractional-turn arithmetic.
//!
//! # Design
//!
//! Game time advances in whole turns (`Turn`, driven by `TurnClock`).  Route
//! costs, however, are measured in *fractional* turns: entering a tile that
//! costs half a unit's movement adds `0.5`.  Summing such fractions over a
//! long route accumulates floating-point error, so anything that splits a
//! running total back into "whole turns + remainder" goes through
//! [`split_turns`], which snaps remainders that sit within [`DRIFT_SNAP`] of
//! a turn boundary onto that boundary.

use std::fmt;

/// Cumulative-cost sentinel for a tile that cannot be entered.
pub const IMPASSABLE_TURNS: f64 = -99_999.0;

/// Remainders closer than this to 0 or 1 are snapped onto the boundary.
pub const DRIFT_SNAP: f64 = 0.01;

/// Largest movement allowance a unit may have.
///
/// One point of a larger allowance is a fraction of a turn no bigger than
/// [`DRIFT_SNAP`], which [`split_turns`] would snap away.
pub const MAX_MOVEMENT: u32 = 99;

/// Corrections at or below this size are ordinary float noise.
const FLOAT_NOISE: f64 = 1e-6;

/// Split a cumulative turn cost into `(whole_turns, remainder)`.
///
/// `remainder` is in `[0, 1)`.  A remainder within [`DRIFT_SNAP`] of 0 becomes
/// 0; one within [`DRIFT_SNAP`] of 1 rolls over into the next whole turn.
/// Corrections larger than float noise mean a cost function produced a value
/// that does not line up with turn boundaries; they are logged as warnings.
pub fn split_turns(turns_so_far: f64) -> (f64, f64) {
    let whole = turns_so_far.floor();
    let remainder = turns_so_far - whole;

    if remainder < DRIFT_SNAP {
        note_drift(turns_so_far, remainder);
        (whole, 0.0)
    } else if remainder > 1.0 - DRIFT_SNAP {
        note_drift(turns_so_far, 1.0 - remainder);
        (whole + 1.0, 0.0)
    } else {
        (whole, remainder)
    }
}

fn note_drift(turns_so_far: f64, correction: f64) {
    if correction > FLOAT_NOISE {
        log::warn!(
            "turn cost {turns_so_far} snapped by {correction:.6} onto a turn boundary; \
             upstream movement costs are inconsistent"
        );
    } else if correction > 0.0 {
        log::trace!("turn cost {turns_so_far} snapped by {correction:e}");
    }
}

// ── Turn ──────────────────────────────────────────────────────────────────────

/// An absolute game-turn counter.  Turn 0 is the first turn played.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}", self.0)
    }
}

// ── TurnClock ─────────────────────────────────────────────────────────────────

/// Tracks the current turn.  Advanced once per `end_turn`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnClock {
    pub current: Turn,
}

impl TurnClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current.next();
    }

    /// Number of turns completed so far.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.current.0
    }
}
