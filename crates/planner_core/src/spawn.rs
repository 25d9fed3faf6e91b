//! Neighbourhood spawn conditions.

use crate::board::{surrounding_cells, Board};
use planner_data::{MutationId, Position, SpawnCondition};
use std::collections::HashMap;

/// Occupied cells per mutation type in the ring around a footprint.
/// Each grid cell counts once, so a 2×2 neighbour can contribute up to 4.
#[must_use]
pub fn neighbour_counts(board: &Board, origin: Position, size: u8) -> HashMap<MutationId, u32> {
    let mut counts = HashMap::new();
    for pos in surrounding_cells(origin, size) {
        if let Some(piece) = board.piece_at(pos) {
            *counts.entry(piece.type_id).or_insert(0) += 1;
        }
    }
    counts
}

/// Whether a `size` piece may spawn with its origin at `origin`.
///
/// Fails when the origin is occupied or there are no conditions. Otherwise
/// every condition must hold.
#[must_use]
pub fn satisfies_spawn_conditions(
    board: &Board,
    origin: Position,
    conditions: &[SpawnCondition],
    size: u8,
) -> bool {
    if board.is_occupied(origin) || conditions.is_empty() {
        return false;
    }
    let counts = neighbour_counts(board, origin, size);
    conditions
        .iter()
        .all(|c| counts.get(&c.required).copied().unwrap_or(0) >= c.min_count)
}
