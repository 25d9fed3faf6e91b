//! Core data structures for the Mutation Planner board.

pub mod data;

pub use data::board::{PlacementId, Position, BOARD_SIZE, CELL_COUNT};
pub use data::catalog::{CatalogConfig, RawMutation, RawSpawnBlock, RawSpawnCondition};
pub use data::mutation::{Category, GrowthProfile, MutationId, MutationType, SpawnCondition};
pub use data::piece::{footprint, Piece};
