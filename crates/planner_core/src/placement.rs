//! Player placement and removal.

use crate::board::Board;
use crate::catalog::Catalog;
use crate::config::SimulationConfig;
use crate::growth::GrowthLogic;
use planner_data::{MutationId, Piece, PlacementId, Position};
use serde::{Deserialize, Serialize};

/// Monotonic source of placement ids. Never rewinds except through undo/redo.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementIds {
    next: PlacementId,
}

impl PlacementIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next placement will receive.
    #[must_use]
    pub fn peek(&self) -> PlacementId {
        self.next
    }

    pub fn allocate(&mut self) -> PlacementId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Places a player piece of `type_id` with its top-left corner at `origin`.
///
/// Pieces overlapping the footprint are removed in full first. Returns the new
/// placement id, or `None` without touching the board when the type is unknown
/// or the footprint would leave the board.
pub fn place(
    board: &mut Board,
    ids: &mut PlacementIds,
    catalog: &Catalog,
    sim: &SimulationConfig,
    origin: Position,
    type_id: MutationId,
) -> Option<PlacementId> {
    let mutation = catalog.get(type_id)?;
    if !Board::fits(origin, mutation.size) {
        return None;
    }

    for evicted in board.overlapping(origin, mutation.size) {
        board.remove(evicted);
    }

    let placement_id = ids.allocate();
    let inserted = board.insert(Piece {
        placement_id,
        type_id,
        origin,
        size: mutation.size,
        player_placed: true,
        growth_stage: mutation.initial_stage(sim.simulation_mode),
    });
    debug_assert!(inserted, "footprint was cleared before insert");

    tracing::trace!(%origin, type_id, placement_id, "Placed mutation");
    Some(placement_id)
}

/// Removes the piece covering `pos`. Returns `false` if the cell is empty.
pub fn destroy(board: &mut Board, pos: Position) -> bool {
    match board.remove_at(pos) {
        Some(piece) => {
            tracing::trace!(origin = %piece.origin, placement_id = piece.placement_id, "Destroyed mutation");
            true
        }
        None => false,
    }
}
