use serde::{Deserialize, Serialize};

use crate::{
    error::{PlanError, Result},
    planner::domain::PuzzleDomain,
};

/// Which side of the river something is on. `Near` is where everyone starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    Near,
    Far,
}

impl Bank {
    pub fn across(self) -> Bank {
        match self {
            Bank::Near => Bank::Far,
            Bank::Far => Bank::Near,
        }
    }
}

/// The three passengers of the classic wolf/goat/cabbage puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cargo {
    Wolf,
    Goat,
    Cabbage,
}

const ALL_CARGO: [Cargo; 3] = [Cargo::Wolf, Cargo::Goat, Cargo::Cabbage];

/// A complete river-crossing configuration. One closed enum covers both
/// variants of the family, so a state can never mix representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiverState {
    /// Classic variant: the side each participant is currently on.
    Classic {
        farmer: Bank,
        wolf: Bank,
        goat: Bank,
        cabbage: Bank,
    },
    /// Counted-group variant: how many of each group remain on the near
    /// bank, plus the boat's side. Far-bank counts are the complements.
    Counted {
        missionaries: u8,
        cannibals: u8,
        boat: Bank,
    },
}

/// One boat trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiverAction {
    /// The farmer rows across alone.
    CrossAlone,
    /// The farmer rows across with one item.
    CrossWith(Cargo),
    /// A crew of `missionaries + cannibals` people rows across.
    Ferry { missionaries: u8, cannibals: u8 },
}

/// Which river-crossing variant to solve, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiverKind {
    Classic,
    Counted {
        missionaries: u8,
        cannibals: u8,
        boat_capacity: u8,
    },
}

/// A validated river-crossing instance.
///
/// Construction fails fast on degenerate parameters (zero boat capacity, or
/// group counts that already violate the safety rule before anyone moves);
/// a successfully constructed instance is immutable and can be handed to
/// [`BreadthFirstPlanner`](crate::planner::bfs::BreadthFirstPlanner) as is.
#[derive(Debug, Clone)]
pub struct RiverCrossing {
    kind: RiverKind,
}

impl RiverCrossing {
    pub fn new(kind: RiverKind) -> Result<Self> {
        if let RiverKind::Counted {
            missionaries,
            cannibals,
            boat_capacity,
        } = kind
        {
            if boat_capacity == 0 {
                return Err(
                    PlanError::InvalidInstance("boat capacity must be at least 1".into()).into(),
                );
            }
            if missionaries > 0 && cannibals > missionaries {
                return Err(PlanError::InvalidInstance(format!(
                    "{cannibals} cannibals outnumber {missionaries} missionaries \
                     before anyone has moved"
                ))
                .into());
            }
        }
        Ok(Self { kind })
    }

    pub fn kind(&self) -> RiverKind {
        self.kind
    }

    /// One bank is safe when no missionaries are present or they are not
    /// outnumbered.
    fn bank_safe(missionaries: u8, cannibals: u8) -> bool {
        missionaries == 0 || cannibals <= missionaries
    }
}

impl PuzzleDomain for RiverCrossing {
    type State = RiverState;
    type Action = RiverAction;

    fn initial_state(&self) -> RiverState {
        match self.kind {
            RiverKind::Classic => RiverState::Classic {
                farmer: Bank::Near,
                wolf: Bank::Near,
                goat: Bank::Near,
                cabbage: Bank::Near,
            },
            RiverKind::Counted {
                missionaries,
                cannibals,
                ..
            } => RiverState::Counted {
                missionaries,
                cannibals,
                boat: Bank::Near,
            },
        }
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        match *state {
            RiverState::Classic {
                farmer,
                wolf,
                goat,
                cabbage,
            } => [farmer, wolf, goat, cabbage].iter().all(|b| *b == Bank::Far),
            RiverState::Counted {
                missionaries,
                cannibals,
                boat,
            } => missionaries == 0 && cannibals == 0 && boat == Bank::Far,
        }
    }

    fn neighbors(&self, state: &RiverState) -> Vec<(RiverState, RiverAction)> {
        let mut out = Vec::new();
        match (*state, self.kind) {
            (
                RiverState::Classic {
                    farmer,
                    wolf,
                    goat,
                    cabbage,
                },
                RiverKind::Classic,
            ) => {
                out.push((
                    RiverState::Classic {
                        farmer: farmer.across(),
                        wolf,
                        goat,
                        cabbage,
                    },
                    RiverAction::CrossAlone,
                ));
                for cargo in ALL_CARGO {
                    let side = match cargo {
                        Cargo::Wolf => wolf,
                        Cargo::Goat => goat,
                        Cargo::Cabbage => cabbage,
                    };
                    // The boat only fits one item, and it must be on the
                    // farmer's side to be loaded.
                    if side != farmer {
                        continue;
                    }
                    let moved = farmer.across();
                    let next = RiverState::Classic {
                        farmer: moved,
                        wolf: if cargo == Cargo::Wolf { moved } else { wolf },
                        goat: if cargo == Cargo::Goat { moved } else { goat },
                        cabbage: if cargo == Cargo::Cabbage { moved } else { cabbage },
                    };
                    out.push((next, RiverAction::CrossWith(cargo)));
                }
            }
            (
                RiverState::Counted {
                    missionaries,
                    cannibals,
                    boat,
                },
                RiverKind::Counted {
                    missionaries: total_m,
                    cannibals: total_c,
                    boat_capacity,
                },
            ) => {
                // People available to crew the boat on its current side.
                let (avail_m, avail_c) = match boat {
                    Bank::Near => (missionaries, cannibals),
                    Bank::Far => (total_m - missionaries, total_c - cannibals),
                };
                for m in 0..=boat_capacity.min(avail_m) {
                    for c in 0..=(boat_capacity - m).min(avail_c) {
                        if m + c == 0 {
                            continue; // someone has to row
                        }
                        let next = match boat {
                            Bank::Near => RiverState::Counted {
                                missionaries: missionaries - m,
                                cannibals: cannibals - c,
                                boat: Bank::Far,
                            },
                            Bank::Far => RiverState::Counted {
                                missionaries: missionaries + m,
                                cannibals: cannibals + c,
                                boat: Bank::Near,
                            },
                        };
                        out.push((
                            next,
                            RiverAction::Ferry {
                                missionaries: m,
                                cannibals: c,
                            },
                        ));
                    }
                }
            }
            // Variant mismatch is caught by check_state on the generated
            // state; nothing sensible to enumerate here.
            _ => {}
        }
        out
    }

    fn is_safe(&self, state: &RiverState) -> bool {
        match (*state, self.kind) {
            (
                RiverState::Classic {
                    farmer,
                    wolf,
                    goat,
                    cabbage,
                },
                RiverKind::Classic,
            ) => {
                // The goat is only in danger when the farmer is elsewhere.
                let goat_unattended = farmer != goat;
                !(goat_unattended && (wolf == goat || cabbage == goat))
            }
            (
                RiverState::Counted {
                    missionaries,
                    cannibals,
                    ..
                },
                RiverKind::Counted {
                    missionaries: total_m,
                    cannibals: total_c,
                    ..
                },
            ) => {
                Self::bank_safe(missionaries, cannibals)
                    && Self::bank_safe(total_m - missionaries, total_c - cannibals)
            }
            _ => false,
        }
    }

    fn check_state(&self, state: &RiverState) -> Result<()> {
        match (*state, self.kind) {
            (RiverState::Classic { .. }, RiverKind::Classic) => Ok(()),
            (
                RiverState::Counted {
                    missionaries,
                    cannibals,
                    ..
                },
                RiverKind::Counted {
                    missionaries: total_m,
                    cannibals: total_c,
                    ..
                },
            ) => {
                if missionaries > total_m || cannibals > total_c {
                    return Err(PlanError::InvariantViolation(format!(
                        "bank populations out of range: {missionaries}/{total_m} \
                         missionaries, {cannibals}/{total_c} cannibals"
                    ))
                    .into());
                }
                Ok(())
            }
            (state, kind) => Err(PlanError::InvariantViolation(format!(
                "state {state:?} does not belong to instance kind {kind:?}"
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Bank, RiverCrossing, RiverKind, RiverState};
    use crate::planner::{bfs::BreadthFirstPlanner, domain::PuzzleDomain};

    fn solve(kind: RiverKind) -> Option<crate::planner::path::SolutionPath<RiverState, super::RiverAction>> {
        let instance = RiverCrossing::new(kind).unwrap();
        let (path, _stats) = BreadthFirstPlanner::new().solve(&instance).unwrap();
        path
    }

    #[test]
    fn classic_takes_seven_crossings() {
        let instance = RiverCrossing::new(RiverKind::Classic).unwrap();
        let path = solve(RiverKind::Classic).unwrap();

        assert_eq!(path.num_actions(), 7);
        assert_eq!(path.steps().len(), 8);
        assert!(instance.is_goal(path.final_state()));
        assert!(path.states().all(|s| instance.is_safe(s)));
    }

    #[test]
    fn classic_path_is_legal_step_by_step() {
        let instance = RiverCrossing::new(RiverKind::Classic).unwrap();
        let path = solve(RiverKind::Classic).unwrap();

        for pair in path.steps().windows(2) {
            let action = pair[1].action.unwrap();
            assert!(
                instance
                    .neighbors(&pair[0].state)
                    .contains(&(pair[1].state, action)),
                "step {action:?} not produced by neighbor enumeration"
            );
        }
    }

    #[test]
    fn three_missionaries_three_cannibals_takes_eleven_crossings() {
        let kind = RiverKind::Counted {
            missionaries: 3,
            cannibals: 3,
            boat_capacity: 2,
        };
        let path = solve(kind).unwrap();

        assert_eq!(path.num_actions(), 11);
        assert_eq!(
            *path.final_state(),
            RiverState::Counted {
                missionaries: 0,
                cannibals: 0,
                boat: Bank::Far,
            }
        );
    }

    #[test]
    fn four_and_four_with_two_seat_boat_is_unsolvable() {
        let kind = RiverKind::Counted {
            missionaries: 4,
            cannibals: 4,
            boat_capacity: 2,
        };
        assert!(solve(kind).is_none());
    }

    #[test]
    fn counted_paths_never_strand_missionaries() {
        let kind = RiverKind::Counted {
            missionaries: 3,
            cannibals: 3,
            boat_capacity: 2,
        };
        let instance = RiverCrossing::new(kind).unwrap();
        let path = solve(kind).unwrap();

        for state in path.states() {
            assert!(instance.is_safe(state), "unsafe state on path: {state:?}");
        }
    }

    #[test]
    fn zero_capacity_boat_is_rejected() {
        let err = RiverCrossing::new(RiverKind::Counted {
            missionaries: 2,
            cannibals: 2,
            boat_capacity: 0,
        })
        .unwrap_err();
        assert!(matches!(
            err.inner(),
            crate::error::PlanError::InvalidInstance(_)
        ));
    }

    #[test]
    fn outnumbered_initial_state_is_rejected() {
        let result = RiverCrossing::new(RiverKind::Counted {
            missionaries: 2,
            cannibals: 3,
            boat_capacity: 2,
        });
        assert!(result.is_err());
    }

    #[cfg(test)]
    mod prop_tests {
        use proptest::prelude::*;

        use super::super::{RiverCrossing, RiverKind};
        use crate::planner::{bfs::BreadthFirstPlanner, domain::PuzzleDomain};

        fn counted_kinds() -> impl Strategy<Value = RiverKind> {
            (0u8..=4, 1u8..=3).prop_flat_map(|(missionaries, boat_capacity)| {
                (0u8..=missionaries.max(1)).prop_map(move |cannibals| RiverKind::Counted {
                    missionaries,
                    // Never more cannibals than missionaries unless there
                    // are no missionaries at all, so construction succeeds.
                    cannibals: if missionaries == 0 { 0 } else { cannibals },
                    boat_capacity,
                })
            })
        }

        proptest! {
            #[test]
            fn returned_paths_are_safe_legal_and_end_at_the_goal(kind in counted_kinds()) {
                let instance = RiverCrossing::new(kind).unwrap();
                let (path, _stats) = BreadthFirstPlanner::new().solve(&instance).unwrap();

                if let Some(path) = path {
                    prop_assert!(instance.is_goal(path.final_state()));
                    for state in path.states() {
                        prop_assert!(instance.is_safe(state));
                        prop_assert!(instance.check_state(state).is_ok());
                    }
                    for pair in path.steps().windows(2) {
                        let action = pair[1].action.unwrap();
                        prop_assert!(instance
                            .neighbors(&pair[0].state)
                            .contains(&(pair[1].state, action)));
                    }
                }
            }
        }
    }
}
