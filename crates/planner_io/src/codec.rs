//! Board export string: one byte per cell, run-length encoded, then base64.
//!
//! Cell bytes, row-major:
//! - `255` for an empty cell or a cell that is not a piece origin
//! - otherwise the type id (0..=126), with bit `0x80` set for player placements
//!
//! The byte stream is written as `(value, count)` pairs with `count <= 255`.
//! Changing any of this breaks previously exported strings.

use crate::error::{IoError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use planner_core::board::Board;
use planner_core::catalog::Catalog;
use planner_core::config::SimulationConfig;
use planner_core::placement::{place, PlacementIds};
use planner_data::{MutationId, Position, CELL_COUNT};

/// Byte for cells that carry no origin.
pub const EMPTY_CELL: u8 = 255;
/// Set on origins of player-placed pieces.
pub const PLAYER_FLAG: u8 = 0x80;
/// Largest type id the format can carry.
pub const MAX_ENCODABLE_ID: MutationId = 126;

/// Result of [`encode_board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBoard {
    pub text: String,
    /// Origins written as empty because their type id does not fit the format.
    pub dropped: Vec<Position>,
}

impl EncodedBoard {
    #[must_use]
    pub fn is_lossy(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// Flattens the board into one byte per cell.
#[must_use]
pub fn board_to_cells(board: &Board) -> (Vec<u8>, Vec<Position>) {
    let mut cells = vec![EMPTY_CELL; CELL_COUNT];
    let mut dropped = Vec::new();
    for piece in board.pieces() {
        let Some(idx) = piece.origin.index() else {
            continue;
        };
        if piece.type_id > MAX_ENCODABLE_ID {
            tracing::warn!(
                origin = %piece.origin,
                type_id = piece.type_id,
                "Type id does not fit the export format, writing cell as empty"
            );
            dropped.push(piece.origin);
            continue;
        }
        let mut byte = piece.type_id as u8;
        if piece.player_placed {
            byte |= PLAYER_FLAG;
        }
        cells[idx] = byte;
    }
    dropped.sort();
    (cells, dropped)
}

/// Run-length encodes `bytes` as `(value, count)` pairs.
#[must_use]
pub fn rle_encode(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut iter = bytes.iter().copied().peekable();
    while let Some(value) = iter.next() {
        let mut count: u8 = 1;
        while count < u8::MAX && iter.peek() == Some(&value) {
            iter.next();
            count += 1;
        }
        out.push(value);
        out.push(count);
    }
    out
}

/// Expands `(value, count)` pairs, stopping once `limit` bytes are produced.
/// A trailing odd byte is ignored.
#[must_use]
pub fn rle_decode(pairs: &[u8], limit: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(limit.min(pairs.len() / 2 * usize::from(u8::MAX)));
    for pair in pairs.chunks_exact(2) {
        let room = limit - out.len();
        if room == 0 {
            break;
        }
        out.extend(std::iter::repeat(pair[0]).take(usize::from(pair[1]).min(room)));
    }
    out
}

#[must_use]
pub fn encode_board(board: &Board) -> EncodedBoard {
    let (cells, dropped) = board_to_cells(board);
    EncodedBoard {
        text: STANDARD.encode(rle_encode(&cells)),
        dropped,
    }
}

/// Decodes an export string into exactly one byte per cell. Short input is
/// padded with empty cells and extra input is dropped; only invalid base64
/// is an error.
pub fn decode_cells(text: &str) -> Result<Vec<u8>> {
    let raw = STANDARD
        .decode(text.trim())
        .map_err(|e| IoError::codec(format!("Invalid base64: {e}")))?;
    let mut cells = rle_decode(&raw, CELL_COUNT);
    if cells.len() < CELL_COUNT {
        tracing::debug!(
            decoded = cells.len(),
            expected = CELL_COUNT,
            "Short export string, padding with empty cells"
        );
    }
    cells.resize(CELL_COUNT, EMPTY_CELL);
    Ok(cells)
}

/// Rebuilds a board from an export string.
///
/// Each origin is re-placed through the regular placement rules, so growth
/// stages follow `sim`, and then gets its placement source restored. Type ids
/// missing from `catalog` are skipped.
pub fn decode_board(
    text: &str,
    catalog: &Catalog,
    sim: &SimulationConfig,
    ids: &mut PlacementIds,
) -> Result<Board> {
    let cells = decode_cells(text)?;
    let mut board = Board::new();
    for (idx, byte) in cells.into_iter().enumerate() {
        if byte == EMPTY_CELL {
            continue;
        }
        let origin = Position::from_index(idx);
        let type_id = MutationId::from(byte & !PLAYER_FLAG);
        let player_placed = byte & PLAYER_FLAG != 0;

        let Some(placement_id) = place(&mut board, ids, catalog, sim, origin, type_id) else {
            tracing::warn!(%origin, type_id, "Skipping unplaceable piece in export string");
            continue;
        };
        if let Some(piece) = board.piece_mut(placement_id) {
            piece.player_placed = player_placed;
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_data::CatalogConfig;

    fn catalog() -> Catalog {
        let config: CatalogConfig = serde_json::from_str(
            r#"{"scoreParams": ["wheat"], "cards": [
                {"name": "Wheat", "size": 1, "wheat": 1},
                {"name": "Melon", "size": 2, "wheat": 3},
                {"name": "Tree", "size": 3, "wheat": 9}
            ]}"#,
        )
        .unwrap();
        Catalog::from_config(&config)
    }

    #[test]
    fn test_empty_board_string() {
        let encoded = encode_board(&Board::new());
        // (255, 100) → [0xFF, 0x64]
        assert_eq!(encoded.text, "/2Q=");
        assert!(!encoded.is_lossy());
    }

    #[test]
    fn test_rle_splits_long_runs() {
        let bytes = vec![7u8; 600];
        let pairs = rle_encode(&bytes);
        assert_eq!(pairs, vec![7, 255, 7, 255, 7, 90]);
        assert_eq!(rle_decode(&pairs, usize::MAX), bytes);
    }

    #[test]
    fn test_rle_ignores_trailing_odd_byte() {
        assert_eq!(rle_decode(&[1, 2, 9], usize::MAX), vec![1, 1]);
    }

    #[test]
    fn test_rle_stops_at_limit() {
        assert_eq!(rle_decode(&[4, 3, 5, 255, 6, 255], 5), vec![4, 4, 4, 5, 5]);
        assert!(rle_decode(&[1, 1], 0).is_empty());
    }

    #[test]
    fn test_oversized_input_is_truncated() {
        // 4000 pairs of (wheat, 255) would expand to over a million cells.
        let text = STANDARD.encode([0u8, 255].repeat(4000));
        let cells = decode_cells(&text).unwrap();
        assert_eq!(cells.len(), CELL_COUNT);
        assert!(cells.iter().all(|b| *b == 0));
        assert!(cells.capacity() <= CELL_COUNT * 2);
    }

    #[test]
    fn test_cell_bytes() {
        let catalog = catalog();
        let sim = SimulationConfig::default();
        let mut ids = PlacementIds::new();
        let mut board = Board::new();
        place(&mut board, &mut ids, &catalog, &sim, Position::new(0, 0), 1).unwrap();
        let spawned = place(&mut board, &mut ids, &catalog, &sim, Position::new(5, 5), 2).unwrap();
        board.piece_mut(spawned).unwrap().player_placed = false;

        let (cells, dropped) = board_to_cells(&board);
        assert!(dropped.is_empty());
        assert_eq!(cells[0], 0x81);
        assert_eq!(cells[1], EMPTY_CELL);
        assert_eq!(cells[11], EMPTY_CELL);
        assert_eq!(cells[55], 2);
        assert_eq!(cells.iter().filter(|b| **b != EMPTY_CELL).count(), 2);
    }

    #[test]
    fn test_short_input_is_padded() {
        // (0x80, 1): a single player-placed wheat at (0,0) and nothing else.
        let text = STANDARD.encode([0x80u8, 1]);
        let cells = decode_cells(&text).unwrap();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells[0], 0x80);
        assert!(cells[1..].iter().all(|b| *b == EMPTY_CELL));

        let mut ids = PlacementIds::new();
        let board =
            decode_board(&text, &catalog(), &SimulationConfig::default(), &mut ids).unwrap();
        assert_eq!(board.piece_count(), 1);
        assert!(board.piece_at(Position::new(0, 0)).unwrap().player_placed);
    }

    #[test]
    fn test_invalid_base64_fails() {
        assert!(matches!(decode_cells("not base64!!"), Err(IoError::Codec(_))));
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        let text = STANDARD.encode([42u8, 1, EMPTY_CELL, 99]);
        let mut ids = PlacementIds::new();
        let board =
            decode_board(&text, &catalog(), &SimulationConfig::default(), &mut ids).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_oversized_type_id_is_dropped() {
        let types = (0..=130u32)
            .map(|id| planner_data::MutationType {
                id,
                name: format!("m{id}"),
                image: None,
                size: 1,
                params: vec![1.0],
                conditions: Vec::new(),
                category: planner_data::Category::BaseCrop,
                max_growth_stage: 1,
                growth: planner_data::GrowthProfile::Standard,
            })
            .collect();
        let catalog = Catalog::new(types, vec!["wheat".to_string()]);
        let sim = SimulationConfig::default();
        let mut ids = PlacementIds::new();
        let mut board = Board::new();
        place(&mut board, &mut ids, &catalog, &sim, Position::new(0, 0), 126).unwrap();
        place(&mut board, &mut ids, &catalog, &sim, Position::new(0, 1), 127).unwrap();

        let encoded = encode_board(&board);
        assert_eq!(encoded.dropped, vec![Position::new(0, 1)]);

        let restored = decode_board(&encoded.text, &catalog, &sim, &mut ids).unwrap();
        assert_eq!(restored.piece_count(), 1);
        assert_eq!(restored.piece_at(Position::new(0, 0)).unwrap().type_id, 126);
    }
}
