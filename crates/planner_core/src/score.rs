//! Yield calculation: per-piece base scores and the global modifier chain.

use crate::board::Board;
use crate::catalog::Catalog;
use crate::config::{ModifierConfig, SimulationConfig, MAX_GH_UPGRADE_LEVEL};
use crate::growth::GrowthLogic;
use planner_data::{MutationType, Piece};
use serde::{Deserialize, Serialize};

/// Greenhouse bonus in percent. Linear up to level 8; level 9 is pinned to 20.
#[must_use]
pub fn gh_percent(level: u8) -> f64 {
    if level >= MAX_GH_UPGRADE_LEVEL {
        20.0
    } else {
        f64::from(level) * 2.0
    }
}

/// Unique-crop bonus in percent, capped at 36.
#[must_use]
pub fn unique_percent(level: u8) -> f64 {
    (f64::from(level) * 3.0).min(36.0)
}

/// Score a single piece contributes to the base yield.
#[must_use]
pub fn cell_score(piece: &Piece, mutation: &MutationType, sim: &SimulationConfig) -> f64 {
    let base = mutation.param(sim.score_param_index);
    let evaluating = sim.evaluation_mode;

    if !sim.simulation_mode {
        return if piece.player_placed && !evaluating {
            0.0
        } else {
            base
        };
    }

    if piece.player_placed && mutation.category.is_mutated() && !evaluating {
        return 0.0;
    }
    base * mutation.yield_factor(piece.growth_stage, evaluating)
}

/// Sum of [`cell_score`] over all pieces; each piece counts once.
#[must_use]
pub fn base_yield(board: &Board, catalog: &Catalog, sim: &SimulationConfig) -> f64 {
    board
        .pieces()
        .filter_map(|piece| {
            catalog
                .get(piece.type_id)
                .map(|mutation| cell_score(piece, mutation, sim))
        })
        .sum()
}

/// The individual factors of the modifier chain, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierFactors {
    pub additive_total: f64,
    pub chip_factor: f64,
    pub fortune_factor: f64,
    pub unique_factor: f64,
    pub multiplicative_base: f64,
}

impl ModifierFactors {
    #[must_use]
    pub fn from_config(mods: &ModifierConfig) -> Self {
        Self {
            additive_total: mods.additive_buff_base + gh_percent(mods.gh_upgrade_level) / 100.0,
            chip_factor: 1.0 + mods.chips / 100.0,
            fortune_factor: 1.0 + mods.fortune / 100.0,
            unique_factor: 1.0 + unique_percent(mods.unique_buff_level) / 100.0,
            multiplicative_base: mods.multiplicative_buff_base,
        }
    }

    #[must_use]
    pub fn product(&self) -> f64 {
        self.additive_total
            * self.chip_factor
            * self.fortune_factor
            * self.unique_factor
            * self.multiplicative_base
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub base_yield: f64,
    /// `floor(base_yield × all factors)`.
    pub final_yield: f64,
    pub factors: ModifierFactors,
}

#[must_use]
pub fn apply_modifiers(base_yield: f64, mods: &ModifierConfig) -> ScoreReport {
    let factors = ModifierFactors::from_config(mods);
    ScoreReport {
        base_yield,
        final_yield: (base_yield * factors.product()).floor(),
        factors,
    }
}

#[must_use]
pub fn score_board(
    board: &Board,
    catalog: &Catalog,
    sim: &SimulationConfig,
    mods: &ModifierConfig,
) -> ScoreReport {
    apply_modifiers(base_yield(board, catalog, sim), mods)
}
