use serde::{Deserialize, Serialize};

use crate::{
    error::{PlanError, Result},
    planner::path::{PlanStep, SolutionPath},
};

/// One of the three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    pub fn index(self) -> usize {
        match self {
            Peg::Left => 0,
            Peg::Middle => 1,
            Peg::Right => 2,
        }
    }
}

/// A full peg configuration. Each peg is an ordered stack of disk numbers,
/// bottom to top; disk `1` is the smallest. Invariant: every stack is
/// strictly decreasing, so no disk ever sits on a smaller one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanoiState {
    pub pegs: [Vec<u8>; 3],
}

impl HanoiState {
    /// All of `1..=num_disks` stacked on `peg`, largest at the bottom.
    pub fn stacked(num_disks: u8, peg: Peg) -> Self {
        let mut pegs: [Vec<u8>; 3] = Default::default();
        pegs[peg.index()] = (1..=num_disks).rev().collect();
        Self { pegs }
    }

    /// Applies one move, enforcing the legality rule: the disk must be on
    /// top of `from`, and the top of `to` (if any) must be larger.
    fn apply(&self, action: &HanoiAction) -> Result<HanoiState> {
        let HanoiAction::MoveDisk { disk, from, to } = *action;
        let mut next = self.clone();

        match next.pegs[from.index()].last() {
            Some(&top) if top == disk => {}
            top => {
                return Err(PlanError::InvariantViolation(format!(
                    "disk {disk} is not on top of {from:?} (found {top:?})"
                ))
                .into());
            }
        }
        if let Some(&dest_top) = next.pegs[to.index()].last() {
            if dest_top < disk {
                return Err(PlanError::InvariantViolation(format!(
                    "cannot place disk {disk} on smaller disk {dest_top}"
                ))
                .into());
            }
        }

        next.pegs[from.index()].pop();
        next.pegs[to.index()].push(disk);
        Ok(next)
    }
}

/// Moving one disk between pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HanoiAction {
    MoveDisk { disk: u8, from: Peg, to: Peg },
}

/// Closed-form divide-and-conquer planner for the Tower of Hanoi.
///
/// No search is involved: moving `n` disks from `source` to `target` is
/// "move `n-1` to the spare peg, move disk `n`, move `n-1` back on top",
/// and the resulting `2^n - 1`-move plan is known to be optimal. Every
/// instance with `n >= 0` is solvable, so unlike the breadth-first planner
/// there is no "no solution" outcome.
pub struct RecursivePlanner;

/// Pending work in the unrolled recursion.
enum Frame {
    Split {
        n: u8,
        source: Peg,
        target: Peg,
        auxiliary: Peg,
    },
    Emit(HanoiAction),
}

impl RecursivePlanner {
    /// Creates a new `RecursivePlanner`.
    pub fn new() -> Self {
        Self
    }

    /// Plans the full transfer of `num_disks` disks from `source` to
    /// `target`.
    ///
    /// The returned path starts at the fully-stacked source configuration
    /// and contains exactly `2^num_disks - 1` moves, each replayed against a
    /// stack simulation so the sortedness invariant is verified rather than
    /// assumed. The recursion schedule is driven by an explicit frame stack,
    /// keeping call depth constant regardless of `num_disks`.
    pub fn solve(
        &self,
        num_disks: u8,
        source: Peg,
        target: Peg,
        auxiliary: Peg,
    ) -> Result<SolutionPath<HanoiState, HanoiAction>> {
        if source == target || source == auxiliary || target == auxiliary {
            return Err(PlanError::InvalidInstance(format!(
                "pegs must be distinct, got {source:?}/{target:?}/{auxiliary:?}"
            ))
            .into());
        }

        let mut moves = Vec::new();
        let mut work = vec![Frame::Split {
            n: num_disks,
            source,
            target,
            auxiliary,
        }];
        while let Some(frame) = work.pop() {
            match frame {
                Frame::Split { n: 0, .. } => {}
                Frame::Split {
                    n,
                    source,
                    target,
                    auxiliary,
                } => {
                    // Pushed in reverse so they pop in schedule order.
                    work.push(Frame::Split {
                        n: n - 1,
                        source: auxiliary,
                        target,
                        auxiliary: source,
                    });
                    work.push(Frame::Emit(HanoiAction::MoveDisk {
                        disk: n,
                        from: source,
                        to: target,
                    }));
                    work.push(Frame::Split {
                        n: n - 1,
                        source,
                        target: auxiliary,
                        auxiliary: target,
                    });
                }
                Frame::Emit(action) => moves.push(action),
            }
        }

        // Closed-form postcondition, not an emergent property.
        let expected = 1u128
            .checked_shl(u32::from(num_disks))
            .map(|doubled| doubled - 1);
        if expected != Some(moves.len() as u128) {
            return Err(PlanError::InvariantViolation(format!(
                "expected {expected:?} moves for {num_disks} disks, planned {}",
                moves.len()
            ))
            .into());
        }

        // Replay against the stack simulation; apply() rejects any move
        // that would break the sortedness invariant.
        let mut state = HanoiState::stacked(num_disks, source);
        let mut steps = vec![PlanStep {
            state: state.clone(),
            action: None,
        }];
        for action in moves {
            state = state.apply(&action)?;
            steps.push(PlanStep {
                state: state.clone(),
                action: Some(action),
            });
        }

        if state.pegs[target.index()].len() != usize::from(num_disks) {
            return Err(PlanError::InvariantViolation(format!(
                "plan ended with {} of {num_disks} disks on the target peg",
                state.pegs[target.index()].len()
            ))
            .into());
        }

        Ok(SolutionPath::from_steps(steps))
    }
}

impl Default for RecursivePlanner {
    fn default() -> Self {
        Self::new()
    }
}
