//! # Planner Core
//!
//! The simulation engine for the Mutation Planner 10×10 crop board.
//!
//! This crate contains the deterministic engine logic, including:
//! - The board arena and its geometry helpers
//! - Catalog normalization from raw configuration
//! - Neighbourhood spawn conditions and the per-tick spawn pass
//! - Placement, eviction and growth-stage rules
//! - Base yield and the global modifier chain
//! - Bounded undo/redo history
//!
//! ## Example
//!
//! ```
//! use planner_core::board::Board;
//! use planner_core::catalog::Catalog;
//! use planner_core::config::SimulationConfig;
//! use planner_core::placement::{place, PlacementIds};
//! use planner_core::tick::progress;
//! use planner_data::{CatalogConfig, Position};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config: CatalogConfig = serde_json::from_str(
//!     r#"{"scoreParams": ["wheat"], "cards": [
//!         {"name": "Wheat", "size": 1, "scores": {"wheat": 1}},
//!         {"name": "Ashwreath", "size": 1, "scores": {"wheat": 4},
//!          "conditions": [{"id": 0, "amount": 1}]}
//!     ]}"#,
//! ).unwrap();
//! let catalog = Catalog::from_config(&config);
//! let sim = SimulationConfig::default();
//! let mut board = Board::new();
//! let mut ids = PlacementIds::new();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! place(&mut board, &mut ids, &catalog, &sim, Position::new(4, 4), 0);
//! let report = progress(&mut board, &mut ids, &catalog, &sim, &mut rng);
//! assert_eq!(report.spawned.len(), 8);
//! ```

/// 10×10 board arena and neighbourhood geometry
pub mod board;
/// Mutation catalog and raw-entry normalization
pub mod catalog;
/// Session configuration (modes, modifiers, history)
pub mod config;
/// Growth-stage rules per growth profile
pub mod growth;
/// Undo/redo snapshots
pub mod history;
/// Tracing subscriber setup
pub mod logging;
/// Player placement, eviction and removal
pub mod placement;
/// Base yield and modifier chain
pub mod score;
/// Neighbourhood spawn conditions
pub mod spawn;
/// Growth advance and spawn pass
pub mod tick;

pub use board::{surrounding_cells, Board};
pub use catalog::Catalog;
pub use growth::GrowthLogic;
pub use logging::init_logging;
pub use placement::PlacementIds;
pub use planner_data::{MutationId, MutationType, Piece, PlacementId, Position};
