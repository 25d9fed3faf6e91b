use crate::model::codec::{decode_board, encode_board, EncodedBoard};
use crate::model::session::GameSession;
use rand::Rng;

impl<R: Rng> GameSession<R> {
    /// Encodes the live board as a shareable export string.
    #[must_use]
    pub fn export_board(&self) -> EncodedBoard {
        let encoded = encode_board(&self.board);
        if encoded.is_lossy() {
            tracing::warn!(
                dropped = encoded.dropped.len(),
                "Export string does not carry every piece"
            );
        }
        encoded
    }

    /// Replaces the live board with the one described by `text`.
    ///
    /// Pieces are re-placed under the current simulation settings, so growth
    /// stages are not restored. On a decode error the board is left as it was.
    pub fn import_board(&mut self, text: &str) -> planner_io::Result<()> {
        let mut ids = self.placement_ids;
        let board = decode_board(text, &self.catalog, &self.config.simulation, &mut ids)
            .map_err(|e| e.with_context("importing board"))?;
        tracing::info!(pieces = board.piece_count(), "Board imported");
        self.board = board;
        self.placement_ids = ids;
        self.save_snapshot();
        Ok(())
    }
}
