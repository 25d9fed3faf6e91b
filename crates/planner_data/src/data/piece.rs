use crate::data::board::{PlacementId, Position};
use crate::data::mutation::MutationId;
use serde::{Deserialize, Serialize};

/// A placed or spawned mutation occupying a square footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub placement_id: PlacementId,
    pub type_id: MutationId,
    /// Top-left corner of the footprint.
    pub origin: Position,
    pub size: u8,
    pub player_placed: bool,
    pub growth_stage: u32,
}

impl Piece {
    /// Every coordinate covered by this piece, row-major.
    pub fn footprint(&self) -> impl Iterator<Item = Position> + '_ {
        footprint(self.origin, self.size)
    }

    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        let size = i32::from(self.size);
        pos.row >= self.origin.row
            && pos.row < self.origin.row + size
            && pos.col >= self.origin.col
            && pos.col < self.origin.col + size
    }
}

/// Coordinates of the `size`×`size` square anchored at `origin`, row-major.
/// Off-board coordinates are included; callers filter as needed.
pub fn footprint(origin: Position, size: u8) -> impl Iterator<Item = Position> {
    let size = i32::from(size);
    (0..size).flat_map(move |dr| (0..size).map(move |dc| origin.offset(dr, dc)))
}
