//! Turn-based movement allocation.
//!
//! A unit has `movement` points per turn.  Entering a tile costs a raw number
//! of points, which the allocator expresses as a fraction of a turn
//! (`raw / movement`, capped at one whole turn) and adds to the running
//! turn total.  What happens when the next tile costs more than what is left
//! of the current turn depends on the [`MovementPolicy`]:
//!
//! | Policy    | Fresh turn              | Part-spent turn                        |
//! |-----------|-------------------------|----------------------------------------|
//! | `Strict`  | enter, spending ≤ 1 turn | wait out the turn, enter on the next  |
//! | `Lenient` | enter, spending ≤ 1 turn | enter now, rest of the turn is gone   |
//!
//! The same function prices edges for A* (through [`Mover`]) and decides how
//! far a unit actually walks in [`MovementAllocator::plan_steps`].

use hm_core::{IMPASSABLE_TURNS, MAX_MOVEMENT, MovementPolicy, Terrain, split_turns};
use hm_spatial::PathUnit;

use crate::UnitState;

/// Slack allowed when comparing a turn total against a turn boundary.
pub const TURN_TOLERANCE: f64 = 1e-9;

/// Applies one [`MovementPolicy`] to turn arithmetic.
///
/// The policy is fixed at construction; build a second allocator to compare
/// policies side by side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MovementAllocator {
    policy: MovementPolicy,
}

/// How far one call to `execute_movement` may go.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepPlan {
    /// Tiles that can be entered before the current turn runs out.
    pub steps:       usize,
    /// Fraction of a turn those steps consume.
    pub turns_spent: f64,
}

impl MovementAllocator {
    pub fn new(policy: MovementPolicy) -> Self {
        Self { policy }
    }

    #[inline]
    pub fn policy(&self) -> MovementPolicy {
        self.policy
    }

    /// Cumulative turns after entering a tile of `raw_cost` points with
    /// `turns_so_far` already spent, for a unit with `movement` points per
    /// turn.
    ///
    /// Returns [`IMPASSABLE_TURNS`] if `raw_cost` is negative or `movement`
    /// is outside `1..=MAX_MOVEMENT`.
    pub fn aggregate_turns_to_enter(&self, raw_cost: i32, movement: u32, turns_so_far: f64) -> f64 {
        if raw_cost < 0 || movement == 0 || movement > MAX_MOVEMENT {
            return IMPASSABLE_TURNS;
        }

        let base = (raw_cost as f64 / movement as f64).min(1.0);
        let (whole, remainder) = split_turns(turns_so_far);

        if remainder + base <= 1.0 + TURN_TOLERANCE {
            return whole + remainder + base;
        }

        match self.policy {
            MovementPolicy::Strict => {
                if remainder == 0.0 {
                    // Untouched turn: a unit always gets at least one move.
                    whole + base
                } else {
                    // Idle out this turn, pay for the tile from the next one.
                    whole + 1.0 + base
                }
            }
            MovementPolicy::Lenient => whole + 1.0,
        }
    }

    /// Count how many of `raw_costs` (next tiles first) a unit with
    /// `movement_remaining` of `movement` points can enter this turn.
    pub fn plan_steps<I>(&self, movement: u32, movement_remaining: f64, raw_costs: I) -> StepPlan
    where
        I: IntoIterator<Item = i32>,
    {
        if movement == 0 || movement > MAX_MOVEMENT || movement_remaining <= 0.0 {
            return StepPlan { steps: 0, turns_spent: 0.0 };
        }

        let start = (1.0 - movement_remaining / movement as f64).clamp(0.0, 1.0);
        let mut turns = start;
        let mut steps = 0;

        for raw in raw_costs {
            let next = self.aggregate_turns_to_enter(raw, movement, turns);
            if next < 0.0 || next > 1.0 + TURN_TOLERANCE {
                break;
            }
            turns = next;
            steps += 1;
        }

        StepPlan { steps, turns_spent: (turns - start).max(0.0) }
    }
}

// ── Mover ─────────────────────────────────────────────────────────────────────

/// A unit seen through an allocator: the [`PathUnit`] handed to searches.
#[derive(Copy, Clone, Debug)]
pub struct Mover<'a> {
    pub unit:      &'a UnitState,
    pub allocator: MovementAllocator,
}

impl PathUnit for Mover<'_> {
    fn movement(&self) -> u32 {
        self.unit.movement
    }

    fn movement_remaining(&self) -> f64 {
        self.unit.movement_remaining
    }

    fn movement_cost_to_enter(&self, terrain: &Terrain) -> i32 {
        self.unit.movement_cost_to_enter(terrain)
    }

    fn aggregate_turns_to_enter(&self, terrain: &Terrain, turns_so_far: f64) -> f64 {
        self.allocator.aggregate_turns_to_enter(
            self.movement_cost_to_enter(terrain),
            self.unit.movement,
            turns_so_far,
        )
    }
}
