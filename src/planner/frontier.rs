use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use im::Vector;

use crate::planner::path::PlanStep;

/// The BFS frontier: a FIFO queue of open nodes plus the visited set.
///
/// A state is admitted at most once, the first time it is pushed; later
/// pushes of the same state are rejected. Because BFS pushes states in
/// non-decreasing distance order, the first admission is always along a
/// shortest path, so rejected duplicates can never improve on it.
///
/// Each node carries its path-so-far as a persistent [`im::Vector`], so
/// extending a path for a child node shares structure with the parent
/// instead of copying the whole prefix.
pub struct Frontier<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    queue: VecDeque<(S, Vector<PlanStep<S, A>>)>,
    seen: HashSet<S>,
}

impl<S, A> Frontier<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Enqueues `state` with its path-so-far. Returns `false` (and drops the
    /// node) if the state was already admitted.
    pub fn push_back(&mut self, state: S, path: Vector<PlanStep<S, A>>) -> bool {
        if self.seen.contains(&state) {
            return false;
        }
        self.seen.insert(state.clone());
        self.queue.push_back((state, path));
        true
    }

    pub fn pop_front(&mut self) -> Option<(S, Vector<PlanStep<S, A>>)> {
        self.queue.pop_front()
    }

    /// Number of open (not yet expanded) nodes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<S, A> Default for Frontier<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use im::Vector;

    use super::Frontier;

    #[test]
    fn fifo_order() {
        let mut frontier: Frontier<u32, char> = Frontier::new();
        assert!(frontier.push_back(1, Vector::new()));
        assert!(frontier.push_back(2, Vector::new()));
        assert!(frontier.push_back(3, Vector::new()));

        assert_eq!(frontier.pop_front().map(|(s, _)| s), Some(1));
        assert_eq!(frontier.pop_front().map(|(s, _)| s), Some(2));
        assert_eq!(frontier.pop_front().map(|(s, _)| s), Some(3));
        assert_eq!(frontier.pop_front().map(|(s, _)| s), None);
    }

    #[test]
    fn rejects_duplicates_even_after_pop() {
        let mut frontier: Frontier<u32, char> = Frontier::new();
        assert!(frontier.push_back(1, Vector::new()));
        assert!(!frontier.push_back(1, Vector::new()));

        frontier.pop_front();
        // Visited, not just queued: a popped state must stay rejected.
        assert!(!frontier.push_back(1, Vector::new()));
        assert!(frontier.is_empty());
    }
}
