//! Growth-stage rules per [`GrowthProfile`].

use crate::board::Board;
use crate::catalog::Catalog;
use planner_data::{GrowthProfile, MutationType};

/// Stage a magic jerrybean starts at when placed during simulation.
pub const JERRYBEAN_INITIAL_STAGE: u32 = 120;
/// Growth stages per yield step of a magic jerrybean.
pub const JERRYBEAN_YIELD_STEP: u32 = 15;
/// Stages on which a glasscorn can be harvested.
pub const GLASSCORN_HARVEST_STAGES: [u32; 2] = [7, 8];
/// Stage a glasscorn falls back to after its last growing stage.
pub const GLASSCORN_RESTART_STAGE: u32 = 1;

pub trait GrowthLogic {
    /// Stage for a player placement.
    fn initial_stage(&self, simulation_mode: bool) -> u32;
    /// Stage after one simulation tick.
    fn advance(&self, stage: u32) -> u32;
    /// Multiplier on the base score at `stage` while simulating. With
    /// `evaluating`, completion gates are ignored.
    fn yield_factor(&self, stage: u32, evaluating: bool) -> f64;
}

impl GrowthLogic for MutationType {
    fn initial_stage(&self, simulation_mode: bool) -> u32 {
        if !simulation_mode {
            return self.max_growth_stage;
        }
        match self.growth {
            GrowthProfile::MagicJerrybean => JERRYBEAN_INITIAL_STAGE,
            _ if self.category.is_mutated() => self.max_growth_stage,
            _ => 0,
        }
    }

    fn advance(&self, stage: u32) -> u32 {
        match self.growth {
            GrowthProfile::Glasscorn => {
                if stage >= self.max_growth_stage.saturating_sub(1) {
                    GLASSCORN_RESTART_STAGE
                } else {
                    stage + 1
                }
            }
            GrowthProfile::Standard | GrowthProfile::MagicJerrybean => {
                if stage < self.max_growth_stage {
                    stage + 1
                } else {
                    stage
                }
            }
        }
    }

    fn yield_factor(&self, stage: u32, evaluating: bool) -> f64 {
        match self.growth {
            GrowthProfile::MagicJerrybean => f64::from(stage / JERRYBEAN_YIELD_STEP),
            GrowthProfile::Glasscorn => {
                if evaluating || GLASSCORN_HARVEST_STAGES.contains(&stage) {
                    1.0
                } else {
                    0.0
                }
            }
            GrowthProfile::Standard => {
                if evaluating || self.max_growth_stage == 0 || stage >= self.max_growth_stage {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Advances every piece on the board by one stage. Returns how many pieces
/// changed stage.
pub fn advance_growth(board: &mut Board, catalog: &Catalog) -> usize {
    let mut changed = 0;
    for piece in board.pieces_mut() {
        let Some(mutation) = catalog.get(piece.type_id) else {
            continue;
        };
        let next = mutation.advance(piece.growth_stage);
        if next != piece.growth_stage {
            piece.growth_stage = next;
            changed += 1;
        }
    }
    changed
}
