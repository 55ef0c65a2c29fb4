use std::hash::Hash;

use crate::error::Result;

/// A trait that defines the "frontend" for a specific puzzle family.
///
/// This is the primary interface for connecting a concrete puzzle (like a
/// river crossing or a set of water jugs) to the generic planner. By
/// implementing this trait, an instance describes its complete state graph:
/// the initial configuration, the move vocabulary, the goal, and the safety
/// rule that forbids certain intermediate states.
pub trait PuzzleDomain {
    /// A complete, immutable snapshot of one puzzle configuration.
    ///
    /// States must have value equality and a stable hash: the planner's
    /// visited set is keyed on the state value, and two states describing the
    /// same configuration must compare equal.
    type State: Clone + Eq + Hash + std::fmt::Debug;

    /// One atomic, legal transformation between two states.
    type Action: Clone + std::fmt::Debug;

    /// The configuration every solve starts from.
    fn initial_state(&self) -> Self::State;

    /// The goal predicate. The planner returns the first dequeued state for
    /// which this holds.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerates every state reachable from `state` by exactly one legal
    /// action, paired with that action.
    ///
    /// The enumeration order must be fixed for a given instance: the planner
    /// breaks ties by this order, which is what makes returned paths
    /// reproducible.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action)>;

    /// The safety predicate: returns `false` for states the puzzle forbids
    /// (e.g. the goat left alone with the wolf). Unsafe neighbors are pruned
    /// before they reach the visited set. Defaults to "everything is safe"
    /// for families without a safety rule.
    fn is_safe(&self, _state: &Self::State) -> bool {
        true
    }

    /// Structural invariant check, run defensively on every generated state.
    ///
    /// A failure here means the adapter itself produced a malformed state
    /// (counts out of range, wrong family variant) and is surfaced as
    /// [`PlanError::InvariantViolation`](crate::error::PlanError), not as an
    /// unsolvable instance.
    fn check_state(&self, _state: &Self::State) -> Result<()> {
        Ok(())
    }
}
