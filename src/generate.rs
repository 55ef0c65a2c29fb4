//! Difficulty-driven instance generation.
//!
//! Presets map an integer difficulty (1-10) to parameter ranges per puzzle
//! family; a seeded RNG draws concrete parameters from those ranges and every
//! draw goes through the family's validating constructor, so a returned
//! instance is always well-formed. Solvability is guaranteed analytically
//! where that is cheap (water-jug targets are drawn as multiples of the
//! capacity GCD); elsewhere the planner's `Ok(None)` outcome remains the
//! caller's signal to draw again.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use tracing::debug;

use crate::{
    error::{PlanError, Result},
    puzzles::{
        jugs::WaterJugs,
        river::{RiverCrossing, RiverKind},
    },
};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// `(jug_count, max_capacity)` per difficulty.
const JUG_PRESETS: [(usize, u32); 10] = [
    (2, 5),
    (2, 6),
    (2, 8),
    (2, 10),
    (3, 10),
    (3, 12),
    (3, 14),
    (3, 16),
    (3, 18),
    (3, 20),
];

/// `(group_size, boat_capacity)` for counted river crossings, difficulties
/// 4-10. All entries are known-solvable combinations.
const COUNTED_RIVER_PRESETS: [(u8, u8); 7] = [
    (2, 2),
    (3, 2),
    (3, 2),
    (4, 3),
    (4, 3),
    (5, 3),
    (5, 3),
];

/// `(min_disks, max_disks)` per difficulty.
const HANOI_PRESETS: [(u8, u8); 10] = [
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 10),
    (10, 12),
];

/// Draws validated puzzle instances from difficulty presets.
///
/// The RNG is seeded explicitly so the same seed and difficulty always yield
/// the same instance, which downstream layers rely on for reproducible
/// generation.
pub struct InstanceGenerator {
    rng: ChaCha8Rng,
}

impl InstanceGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a river-crossing instance. Low difficulties use the classic
    /// wolf/goat/cabbage puzzle; higher ones a counted-group crossing.
    pub fn river(&mut self, difficulty: u8) -> Result<RiverCrossing> {
        check_difficulty(difficulty)?;
        if difficulty <= 3 {
            return RiverCrossing::new(RiverKind::Classic);
        }

        let (group, boat_capacity) = COUNTED_RIVER_PRESETS[usize::from(difficulty) - 4];
        let missionaries = group;
        // Fewer cannibals than missionaries keeps the instance valid and
        // varies the puzzle slightly.
        let cannibals = self.rng.gen_range(group.saturating_sub(1)..=group);
        debug!(missionaries, cannibals, boat_capacity, "drew river instance");
        RiverCrossing::new(RiverKind::Counted {
            missionaries,
            cannibals,
            boat_capacity,
        })
    }

    /// Draws a water-jug instance whose target is a multiple of the
    /// capacities' GCD, so the analytical feasibility check always passes.
    pub fn water_jugs(&mut self, difficulty: u8) -> Result<WaterJugs> {
        check_difficulty(difficulty)?;
        let (jug_count, max_capacity) = JUG_PRESETS[usize::from(difficulty) - 1];

        let capacities: Vec<u32> = (0..jug_count)
            .map(|_| self.rng.gen_range(2..=max_capacity))
            .collect();
        let g = capacities.iter().copied().fold(0, gcd);
        let largest = *capacities.iter().max().unwrap_or(&0);
        let target = g * self.rng.gen_range(1..=largest / g);

        debug!(?capacities, target, "drew water-jug instance");
        WaterJugs::new(capacities, target)
    }

    /// Draws a disk count for a Hanoi instance.
    pub fn hanoi_disks(&mut self, difficulty: u8) -> Result<u8> {
        check_difficulty(difficulty)?;
        let (min, max) = HANOI_PRESETS[usize::from(difficulty) - 1];
        Ok(self.rng.gen_range(min..=max))
    }
}

fn check_difficulty(difficulty: u8) -> Result<()> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(PlanError::InvalidInstance(format!(
            "difficulty {difficulty} is outside {MIN_DIFFICULTY}..={MAX_DIFFICULTY}"
        ))
        .into());
    }
    Ok(())
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
