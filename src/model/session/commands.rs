use crate::model::catalog::ScoreParam;
use crate::model::config::ModifierConfig;
use crate::model::history::Snapshot;
use crate::model::placement;
use crate::model::score::{score_board, ScoreReport};
use crate::model::session::GameSession;
use crate::model::tick::{progress, TickReport};
use planner_data::{MutationId, Position};
use rand::Rng;

impl<R: Rng> GameSession<R> {
    /// Places a player piece. Returns `false` and leaves the board and history
    /// untouched if the type is unknown or the piece would leave the board.
    pub fn place(&mut self, origin: Position, type_id: MutationId) -> bool {
        let placed = placement::place(
            &mut self.board,
            &mut self.placement_ids,
            &self.catalog,
            &self.config.simulation,
            origin,
            type_id,
        )
        .is_some();
        if placed {
            self.save_snapshot();
        }
        placed
    }

    /// Removes the piece covering `pos`. Returns `false` on an empty cell.
    pub fn destroy(&mut self, pos: Position) -> bool {
        let destroyed = placement::destroy(&mut self.board, pos);
        if destroyed {
            self.save_snapshot();
        }
        destroyed
    }

    /// Runs one growth-and-spawn step and records it.
    pub fn tick(&mut self) -> TickReport {
        let report = progress(
            &mut self.board,
            &mut self.placement_ids,
            &self.catalog,
            &self.config.simulation,
            &mut self.rng,
        );
        self.save_snapshot();
        report
    }

    #[must_use]
    pub fn score(&self) -> ScoreReport {
        score_board(
            &self.board,
            &self.catalog,
            &self.config.simulation,
            &self.config.modifiers,
        )
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                let snapshot = snapshot.clone();
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                let snapshot = snapshot.clone();
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Records the live board as a new history entry.
    pub fn save_snapshot(&mut self) {
        self.history.save(Snapshot {
            board: self.board.clone(),
            placement_ids: self.placement_ids,
        });
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.placement_ids = snapshot.placement_ids;
    }

    #[must_use]
    pub fn score_param(&self) -> ScoreParam {
        self.catalog
            .score_param(self.config.simulation.score_param_index)
    }

    /// Selects the score parameter. Returns `false` if `index` is out of range.
    pub fn set_score_param_index(&mut self, index: usize) -> bool {
        if index >= self.catalog.score_params().len() {
            return false;
        }
        self.config.simulation.score_param_index = index;
        true
    }

    #[must_use]
    pub fn simulation_mode(&self) -> bool {
        self.config.simulation.simulation_mode
    }

    /// Toggles the growth-stage system. Existing pieces keep their stages.
    pub fn set_simulation_mode(&mut self, enabled: bool) {
        self.config.simulation.simulation_mode = enabled;
    }

    #[must_use]
    pub fn evaluation_mode(&self) -> bool {
        self.config.simulation.evaluation_mode
    }

    pub fn set_evaluation_mode(&mut self, enabled: bool) {
        self.config.simulation.evaluation_mode = enabled;
    }

    /// Sets the spawn acceptance probability used while simulating.
    pub fn set_spawn_acceptance(&mut self, probability: f64) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&probability),
            "Spawn acceptance must be in [0.0, 1.0]"
        );
        self.config.simulation.spawn_acceptance = probability;
        Ok(())
    }

    #[must_use]
    pub fn modifiers(&self) -> &ModifierConfig {
        &self.config.modifiers
    }

    /// Replaces the global score modifiers after validating them.
    pub fn set_modifiers(&mut self, modifiers: ModifierConfig) -> anyhow::Result<()> {
        let previous = std::mem::replace(&mut self.config.modifiers, modifiers);
        if let Err(e) = self.config.validate() {
            self.config.modifiers = previous;
            return Err(e);
        }
        Ok(())
    }
}
