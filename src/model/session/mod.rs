//! The game session: the single owner of the live board, its history and
//! the settings every command runs under.

use crate::model::catalog::Catalog;
use crate::model::config::AppConfig;
use crate::model::history::History;
use planner_core::board::Board;
use planner_core::placement::PlacementIds;
use rand_chacha::ChaCha8Rng;

pub mod commands;
pub mod init;
pub mod io;

/// One player's planning session.
///
/// Engine functions never touch history; the command methods on this type
/// push a snapshot after every successful board change.
pub struct GameSession<R = ChaCha8Rng> {
    board: Board,
    placement_ids: PlacementIds,
    catalog: Catalog,
    config: AppConfig,
    history: History,
    rng: R,
}

impl<R> GameSession<R> {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn placement_ids(&self) -> PlacementIds {
        self.placement_ids
    }
}
