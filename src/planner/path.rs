use serde::{Deserialize, Serialize};

/// One entry in a [`SolutionPath`]: the state reached, and the action that
/// reached it (`None` only for the initial state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep<S, A> {
    pub state: S,
    pub action: Option<A>,
}

/// The full state/action sequence from the initial configuration to a goal.
///
/// A path is a pure output value: it is constructed once by a planner and
/// never mutated afterwards. The first step is always `(initial, None)`, and
/// every subsequent step's state is reachable from its predecessor by the
/// single legal, safe action it carries. Downstream consumers (narration)
/// can therefore replay the sequence without re-validating legality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionPath<S, A> {
    steps: Vec<PlanStep<S, A>>,
}

impl<S, A> SolutionPath<S, A> {
    /// Builds a path from an already-verified step sequence. Planners are the
    /// only producers; the sequence must start with an action-less step.
    pub(crate) fn from_steps(steps: Vec<PlanStep<S, A>>) -> Self {
        debug_assert!(!steps.is_empty());
        debug_assert!(steps[0].action.is_none());
        Self { steps }
    }

    /// The number of actions in the plan (one less than the number of
    /// states; zero when the initial state is already a goal).
    pub fn num_actions(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn steps(&self) -> &[PlanStep<S, A>] {
        &self.steps
    }

    pub fn initial_state(&self) -> &S {
        &self.steps[0].state
    }

    pub fn final_state(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }

    /// Iterates over every state in visit order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.steps.iter().map(|step| &step.state)
    }

    /// Iterates over the actions in execution order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().filter_map(|step| step.action.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::{PlanStep, SolutionPath};

    fn sample() -> SolutionPath<u32, char> {
        SolutionPath::from_steps(vec![
            PlanStep {
                state: 0,
                action: None,
            },
            PlanStep {
                state: 1,
                action: Some('a'),
            },
            PlanStep {
                state: 2,
                action: Some('b'),
            },
        ])
    }

    #[test]
    fn counts_actions_not_states() {
        let path = sample();
        assert_eq!(path.num_actions(), 2);
        assert_eq!(path.states().count(), 3);
        assert_eq!(path.actions().count(), 2);
    }

    #[test]
    fn endpoints() {
        let path = sample();
        assert_eq!(*path.initial_state(), 0);
        assert_eq!(*path.final_state(), 2);
    }

    #[test]
    fn serializes_round_trip() {
        let path = sample();
        let json = serde_json::to_string(&path).unwrap();
        let back: SolutionPath<u32, char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
