//! The 10×10 board: a slot grid that points into an arena of pieces.
//!
//! Every slot covered by a piece stores that piece's placement id, so a
//! multi-cell piece has exactly one record no matter how many slots it covers.

use planner_data::{footprint, Piece, PlacementId, Position, BOARD_SIZE, CELL_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Option<PlacementId>>,
    pieces: BTreeMap<PlacementId, Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None; CELL_COUNT],
            pieces: BTreeMap::new(),
        }
    }

    /// The piece covering `pos`, if any.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        let id = (*self.slots.get(pos.index()?)?)?;
        self.pieces.get(&id)
    }

    #[must_use]
    pub fn piece(&self, id: PlacementId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn piece_mut(&mut self, id: PlacementId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    /// Pieces in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.values_mut()
    }

    /// Number of distinct pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        pos.index()
            .and_then(|idx| self.slots[idx])
            .is_some()
    }

    /// True iff the whole footprint lies on the board.
    #[must_use]
    pub fn fits(origin: Position, size: u8) -> bool {
        let size = i32::from(size);
        size > 0
            && origin.row >= 0
            && origin.col >= 0
            && origin.row + size <= BOARD_SIZE
            && origin.col + size <= BOARD_SIZE
    }

    /// True iff every cell of the square is on the board and unoccupied.
    #[must_use]
    pub fn is_rect_empty(&self, origin: Position, size: u8) -> bool {
        Self::fits(origin, size) && footprint(origin, size).all(|pos| !self.is_occupied(pos))
    }

    /// Distinct pieces overlapping the square, in the order first met row-major.
    #[must_use]
    pub fn overlapping(&self, origin: Position, size: u8) -> Vec<PlacementId> {
        let mut ids = Vec::new();
        for pos in footprint(origin, size) {
            if let Some(piece) = self.piece_at(pos) {
                if !ids.contains(&piece.placement_id) {
                    ids.push(piece.placement_id);
                }
            }
        }
        ids
    }

    /// Empty cells, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(idx, _)| Position::from_index(idx))
            .collect()
    }

    /// Writes `piece` into every slot of its footprint. Returns `false` and
    /// leaves the board untouched if the footprint is off-board or occupied.
    pub fn insert(&mut self, piece: Piece) -> bool {
        if !self.is_rect_empty(piece.origin, piece.size) {
            return false;
        }
        for pos in piece.footprint() {
            if let Some(idx) = pos.index() {
                self.slots[idx] = Some(piece.placement_id);
            }
        }
        self.pieces.insert(piece.placement_id, piece);
        true
    }

    /// Clears the whole footprint of a piece and returns it.
    pub fn remove(&mut self, id: PlacementId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        for pos in piece.footprint() {
            if let Some(idx) = pos.index() {
                self.slots[idx] = None;
            }
        }
        Some(piece)
    }

    /// Clears the piece covering `pos`, if any.
    pub fn remove_at(&mut self, pos: Position) -> Option<Piece> {
        let id = self.piece_at(pos)?.placement_id;
        self.remove(id)
    }
}

/// Cells adjacent to the `size`×`size` footprint at `origin`: the ring of the
/// `(size+2)`×`(size+2)` square minus the footprint, off-board cells dropped.
/// At most 8, 12 or 16 cells for sizes 1, 2 and 3.
#[must_use]
pub fn surrounding_cells(origin: Position, size: u8) -> Vec<Position> {
    let size = i32::from(size);
    if !(1..=3).contains(&size) {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(4 * size as usize + 4);
    for row in origin.row - 1..=origin.row + size {
        for col in origin.col - 1..=origin.col + size {
            let inside = row >= origin.row
                && row < origin.row + size
                && col >= origin.col
                && col < origin.col + size;
            let pos = Position::new(row, col);
            if !inside && pos.in_bounds() {
                out.push(pos);
            }
        }
    }
    out
}
