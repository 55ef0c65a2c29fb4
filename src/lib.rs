//! Portage is a planning engine for transport and transfer puzzles: river
//! crossings, water-jug measuring, and the Tower of Hanoi.
//!
//! The engine turns a declarative puzzle instance into a verified,
//! minimal-length plan. The core idea is a two-layered architecture: a
//! generic planner backend and a problem-specific frontend per puzzle family.
//!
//! # Core Concepts
//!
//! - **[`PuzzleDomain`]**: a trait you implement to define the "what" of a
//!   puzzle family: its states, its move vocabulary, its goal, and the safety
//!   rule forbidding certain intermediate states.
//! - **[`BreadthFirstPlanner`]**: the generic shortest-path engine shared by
//!   the river-crossing and water-jug families. It explores the induced state
//!   graph in distance order, so the first goal found ends a minimal plan.
//! - **[`RecursivePlanner`]**: the closed-form Tower of Hanoi planner, which
//!   needs no search because the optimal plan has a known recursive shape.
//! - **[`SolutionPath`]**: the verified state/action sequence a planner
//!   returns; every step is legal and safe by construction.
//!
//! # Example: Measuring 4 Units with a 3-Jug and a 5-Jug
//!
//! ```
//! use portage::puzzles::solve_water_jug;
//!
//! let path = portage::puzzles::solve_water_jug(vec![3, 5], 4)
//!     .expect("valid instance")
//!     .expect("gcd(3, 5) = 1 divides 4, so a plan exists");
//!
//! // The shortest schedule takes six steps and ends with 4 units in a jug.
//! assert_eq!(path.num_actions(), 6);
//! assert!(path.final_state().levels.contains(&4));
//!
//! // An unreachable target is reported as "no solution", not an error:
//! // gcd(4, 6) = 2 cannot measure 5.
//! assert!(solve_water_jug(vec![4, 6], 5).unwrap().is_none());
//! ```
//!
//! [`PuzzleDomain`]: crate::planner::domain::PuzzleDomain
//! [`BreadthFirstPlanner`]: crate::planner::bfs::BreadthFirstPlanner
//! [`RecursivePlanner`]: crate::puzzles::hanoi::RecursivePlanner
//! [`SolutionPath`]: crate::planner::path::SolutionPath
pub mod error;
pub mod generate;
pub mod planner;
pub mod puzzles;
