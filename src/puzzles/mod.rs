//! The puzzle-family frontends and the crate's public solve entry points.
//!
//! Each family defines its own closed state/action enums and a validated
//! instance type implementing [`PuzzleDomain`](crate::planner::domain::PuzzleDomain);
//! the functions here wire an instance to the appropriate planner and return
//! the resulting plan.

pub mod hanoi;
pub mod jugs;
pub mod river;

use tracing::debug;

use crate::{
    error::Result,
    planner::{bfs::BreadthFirstPlanner, path::SolutionPath},
    puzzles::{
        hanoi::{HanoiAction, HanoiState, Peg, RecursivePlanner},
        jugs::{JugAction, JugState, WaterJugs},
        river::{RiverAction, RiverCrossing, RiverKind, RiverState},
    },
};

/// Solves a river-crossing puzzle of the given kind.
///
/// Returns `Ok(None)` when the instance has no solution (the search
/// exhausted the finite state space), and an error only for malformed
/// parameters.
pub fn solve_river_crossing(kind: RiverKind) -> Result<Option<SolutionPath<RiverState, RiverAction>>> {
    let instance = RiverCrossing::new(kind)?;
    let (path, _stats) = BreadthFirstPlanner::new().solve(&instance)?;
    Ok(path)
}

/// Solves a water-jug measuring puzzle: reach a configuration where some jug
/// holds exactly `target` units.
///
/// The analytical GCD feasibility check runs first and short-circuits
/// definitely-unsolvable instances without launching a search; when it
/// passes, the breadth-first search remains the authority (the check is only
/// a necessary condition for three or more jugs).
pub fn solve_water_jug(
    capacities: Vec<u32>,
    target: u32,
) -> Result<Option<SolutionPath<JugState, JugAction>>> {
    let instance = WaterJugs::new(capacities, target)?;
    if !instance.feasible() {
        debug!(
            target,
            capacities = ?instance.capacities(),
            "feasibility pre-check failed, skipping search"
        );
        return Ok(None);
    }
    let (path, _stats) = BreadthFirstPlanner::new().solve(&instance)?;
    Ok(path)
}

/// Plans the transfer of `num_disks` disks from `source` to `target`.
///
/// Every instance is solvable, so there is no `None` outcome; errors only
/// arise from non-distinct pegs.
pub fn solve_hanoi(
    num_disks: u8,
    source: Peg,
    target: Peg,
    auxiliary: Peg,
) -> Result<SolutionPath<HanoiState, HanoiAction>> {
    RecursivePlanner::new().solve(num_disks, source, target, auxiliary)
}
