use im::Vector;
use tracing::debug;

use crate::{
    error::{PlanError, Result},
    planner::{
        domain::PuzzleDomain,
        frontier::Frontier,
        path::{PlanStep, SolutionPath},
        stats::SearchStats,
    },
};

/// Generic shortest-path search over the state graph a [`PuzzleDomain`]
/// induces.
///
/// The planner explores states in non-decreasing distance (in actions) from
/// the initial state, so the first goal it dequeues ends a minimal-length
/// plan. It is only meant for domains whose reachable state space is finite
/// by construction (side markers in {0, 1}, jug levels bounded by capacity),
/// which guarantees termination: either a goal is found or the frontier
/// empties and the instance is reported unsolvable.
pub struct BreadthFirstPlanner;

impl BreadthFirstPlanner {
    /// Creates a new `BreadthFirstPlanner`.
    pub fn new() -> Self {
        Self
    }

    /// Attempts to find a shortest plan for `domain`.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(path), stats))` — a minimal-length plan was found. Every
    ///   state on the path satisfies the domain's safety predicate, and
    ///   consecutive states are connected by the single action recorded
    ///   between them.
    /// * `Ok((None, stats))` — the reachable state space was exhausted
    ///   without finding a goal: the instance has no solution.
    /// * `Err(error)` — the initial state was invalid, or the domain's
    ///   adapter produced a structurally broken state.
    ///
    /// Given a fixed neighbor-enumeration order, the returned path is the
    /// same on every run for the same instance.
    pub fn solve<D: PuzzleDomain>(
        &self,
        domain: &D,
    ) -> Result<(Option<SolutionPath<D::State, D::Action>>, SearchStats)> {
        let initial = domain.initial_state();
        domain.check_state(&initial)?;
        if !domain.is_safe(&initial) {
            return Err(PlanError::InvalidInstance(format!(
                "initial state violates the safety predicate: {initial:?}"
            ))
            .into());
        }

        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new();
        let seed_path = Vector::unit(PlanStep {
            state: initial.clone(),
            action: None,
        });
        frontier.push_back(initial, seed_path);
        stats.enqueued += 1;
        stats.peak_frontier = 1;

        while let Some((state, path)) = frontier.pop_front() {
            stats.expanded += 1;

            // First goal dequeued is minimal: BFS visits states in
            // non-decreasing distance order.
            if domain.is_goal(&state) {
                debug!(
                    expanded = stats.expanded,
                    plan_len = path.len() - 1,
                    "goal reached"
                );
                let steps: Vec<_> = path.into_iter().collect();
                return Ok((Some(SolutionPath::from_steps(steps)), stats));
            }

            for (next, action) in domain.neighbors(&state) {
                domain.check_state(&next)?;
                if !domain.is_safe(&next) {
                    stats.pruned_unsafe += 1;
                    continue;
                }

                let mut next_path = path.clone();
                next_path.push_back(PlanStep {
                    state: next.clone(),
                    action: Some(action),
                });
                if frontier.push_back(next, next_path) {
                    stats.enqueued += 1;
                } else {
                    stats.duplicates += 1;
                }
            }

            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        debug!(expanded = stats.expanded, "state space exhausted, no goal");
        Ok((None, stats))
    }
}

impl Default for BreadthFirstPlanner {
    fn default() -> Self {
        Self::new()
    }
}
