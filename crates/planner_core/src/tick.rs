//! One simulation step: growth, then autonomous spawning.

use crate::board::Board;
use crate::catalog::Catalog;
use crate::config::SimulationConfig;
use crate::growth::advance_growth;
use crate::placement::PlacementIds;
use crate::spawn::satisfies_spawn_conditions;
use planner_data::{MutationType, Piece, PlacementId, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a single [`progress`] call changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Pieces whose growth stage moved.
    pub grown: usize,
    /// Placement ids of spawned pieces, in spawn order.
    pub spawned: Vec<PlacementId>,
    /// Eligible spawns suppressed by the acceptance roll.
    pub rejected: usize,
}

/// Advances growth (simulation mode only) and runs the spawn pass.
pub fn progress<R: Rng + ?Sized>(
    board: &mut Board,
    ids: &mut PlacementIds,
    catalog: &Catalog,
    sim: &SimulationConfig,
    rng: &mut R,
) -> TickReport {
    let mut report = TickReport::default();
    if sim.simulation_mode {
        report.grown = advance_growth(board, catalog);
    }
    spawn_pass(board, ids, catalog, sim, rng, &mut report);
    tracing::debug!(
        grown = report.grown,
        spawned = report.spawned.len(),
        rejected = report.rejected,
        pieces = board.piece_count(),
        "Tick complete"
    );
    report
}

/// Visits every empty cell in random order and spawns at most one piece there.
///
/// Candidates at a cell are tried from the highest type id down; the first one
/// whose conditions hold and whose footprint is free wins the cell. Spawns are
/// written immediately, so later cells in the same pass see them.
fn spawn_pass<R: Rng + ?Sized>(
    board: &mut Board,
    ids: &mut PlacementIds,
    catalog: &Catalog,
    sim: &SimulationConfig,
    rng: &mut R,
    report: &mut TickReport,
) {
    let mut spawners: Vec<&MutationType> =
        catalog.iter().filter(|t| t.spawns_autonomously()).collect();
    if spawners.is_empty() {
        return;
    }
    spawners.sort_by(|a, b| b.id.cmp(&a.id));

    let acceptance = sim.effective_spawn_acceptance().clamp(0.0, 1.0);
    let mut empty = board.empty_cells();
    empty.shuffle(rng);

    for pos in empty {
        let Some(winner) = pick_candidate(board, &spawners, pos) else {
            continue;
        };
        if acceptance < 1.0 && !rng.gen_bool(acceptance) {
            report.rejected += 1;
            continue;
        }
        let placement_id = ids.allocate();
        board.insert(Piece {
            placement_id,
            type_id: winner.id,
            origin: pos,
            size: winner.size,
            player_placed: false,
            growth_stage: 0,
        });
        tracing::trace!(origin = %pos, type_id = winner.id, placement_id, "Spawned mutation");
        report.spawned.push(placement_id);
    }
}

fn pick_candidate<'a>(
    board: &Board,
    spawners: &[&'a MutationType],
    pos: Position,
) -> Option<&'a MutationType> {
    spawners.iter().copied().find(|t| {
        satisfies_spawn_conditions(board, pos, &t.conditions, t.size)
            && board.is_rect_empty(pos, t.size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::place;
    use planner_data::{Category, GrowthProfile, MutationId, SpawnCondition};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mutation(id: MutationId, size: u8, conditions: Vec<SpawnCondition>) -> MutationType {
        MutationType {
            id,
            name: format!("m{id}"),
            image: None,
            size,
            params: vec![1.0],
            conditions,
            category: Category::BaseCrop,
            max_growth_stage: 2,
            growth: GrowthProfile::Standard,
        }
    }

    fn needs(id: MutationId, amount: u32) -> SpawnCondition {
        SpawnCondition {
            required: id,
            min_count: amount,
        }
    }

    #[test]
    fn test_highest_id_wins_a_contested_cell() {
        let catalog = Catalog::new(
            vec![
                mutation(0, 1, vec![]),
                mutation(1, 1, vec![needs(0, 1)]),
                mutation(2, 1, vec![needs(0, 1)]),
            ],
            vec!["wheat".into()],
        );
        let sim = SimulationConfig::default();
        let mut board = Board::new();
        let mut ids = PlacementIds::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        place(&mut board, &mut ids, &catalog, &sim, Position::new(0, 0), 0).unwrap();

        let report = progress(&mut board, &mut ids, &catalog, &sim, &mut rng);
        // All three on-board neighbours of (0,0) go to type 2.
        assert_eq!(report.spawned.len(), 3);
        for id in report.spawned {
            let piece = board.piece(id).unwrap();
            assert_eq!(piece.type_id, 2);
            assert!(!piece.player_placed);
            assert_eq!(piece.growth_stage, 0);
        }
    }

    #[test]
    fn test_spawn_needs_whole_footprint() {
        let catalog = Catalog::new(
            vec![
                mutation(0, 1, vec![]),
                mutation(1, 1, vec![]),
                mutation(2, 1, vec![needs(0, 1)]),
                mutation(3, 2, vec![needs(0, 1)]),
            ],
            vec!["wheat".into()],
        );
        let sim = SimulationConfig::default();
        let mut board = Board::new();
        let mut ids = PlacementIds::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        place(&mut board, &mut ids, &catalog, &sim, Position::new(0, 0), 0).unwrap();
        // Fill everything except column 1, so no 2×2 area is left free.
        for idx in 0..planner_data::CELL_COUNT {
            let pos = Position::from_index(idx);
            if pos.col != 1 && pos != Position::new(0, 0) {
                place(&mut board, &mut ids, &catalog, &sim, pos, 1).unwrap();
            }
        }

        let report = progress(&mut board, &mut ids, &catalog, &sim, &mut rng);
        assert_eq!(report.spawned.len(), 2);
        for id in report.spawned {
            assert_eq!(board.piece(id).unwrap().type_id, 2);
        }
    }

    #[test]
    fn test_zero_acceptance_blocks_spawns_in_simulation() {
        let catalog = Catalog::new(
            vec![mutation(0, 1, vec![]), mutation(1, 1, vec![needs(0, 1)])],
            vec!["wheat".into()],
        );
        let sim = SimulationConfig {
            simulation_mode: true,
            spawn_acceptance: 0.0,
            ..Default::default()
        };
        let mut board = Board::new();
        let mut ids = PlacementIds::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        place(&mut board, &mut ids, &catalog, &sim, Position::new(5, 5), 0).unwrap();

        let report = progress(&mut board, &mut ids, &catalog, &sim, &mut rng);
        assert!(report.spawned.is_empty());
        assert_eq!(report.rejected, 8);
        assert_eq!(report.grown, 1);
    }

    #[test]
    fn test_growth_only_in_simulation() {
        let catalog = Catalog::new(vec![mutation(0, 1, vec![])], vec!["wheat".into()]);
        let on = SimulationConfig {
            simulation_mode: true,
            ..Default::default()
        };
        let mut board = Board::new();
        let mut ids = PlacementIds::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let id = place(&mut board, &mut ids, &catalog, &on, Position::new(0, 0), 0).unwrap();

        progress(&mut board, &mut ids, &catalog, &SimulationConfig::default(), &mut rng);
        assert_eq!(board.piece(id).unwrap().growth_stage, 0);
        progress(&mut board, &mut ids, &catalog, &on, &mut rng);
        progress(&mut board, &mut ids, &catalog, &on, &mut rng);
        progress(&mut board, &mut ids, &catalog, &on, &mut rng);
        assert_eq!(board.piece(id).unwrap().growth_stage, 2);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let catalog = Catalog::new(
            vec![
                mutation(0, 1, vec![]),
                mutation(1, 1, vec![needs(0, 1)]),
                mutation(2, 2, vec![needs(1, 2)]),
            ],
            vec!["wheat".into()],
        );
        let sim = SimulationConfig {
            simulation_mode: true,
            spawn_acceptance: 0.5,
            ..Default::default()
        };
        let run = |seed| {
            let mut board = Board::new();
            let mut ids = PlacementIds::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            place(&mut board, &mut ids, &catalog, &sim, Position::new(4, 4), 0).unwrap();
            for _ in 0..5 {
                progress(&mut board, &mut ids, &catalog, &sim, &mut rng);
            }
            board
        };
        assert_eq!(run(99), run(99));
    }
}
