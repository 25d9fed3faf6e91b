/// Asserts the piece covering `($row, $col)` has the given type id.
#[macro_export]
macro_rules! assert_piece_at {
    ($session:expr, $row:expr, $col:expr, $type_id:expr) => {
        let pos = mutation_planner_lib::model::state::Position::new($row, $col);
        let piece = $session
            .board()
            .piece_at(pos)
            .unwrap_or_else(|| panic!("No piece at {}", pos));
        assert_eq!(
            piece.type_id, $type_id,
            "Piece at {} has type {} instead of {}",
            pos, piece.type_id, $type_id
        );
    };
}

/// Asserts the cell at `($row, $col)` is empty.
#[macro_export]
macro_rules! assert_empty_at {
    ($session:expr, $row:expr, $col:expr) => {
        let pos = mutation_planner_lib::model::state::Position::new($row, $col);
        assert!(
            !$session.board().is_occupied(pos),
            "Cell {} should be empty",
            pos
        );
    };
}

/// Asserts the number of pieces on the board.
#[macro_export]
macro_rules! assert_piece_count {
    ($session:expr, $count:expr) => {
        assert_eq!(
            $session.board().piece_count(),
            $count,
            "Piece count mismatch"
        );
    };
}
