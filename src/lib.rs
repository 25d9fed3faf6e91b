//! Mutation Planner: plan and simulate a 10×10 crop garden in which
//! mutations spawn next to the crops they require.
//!
//! The engine lives in the workspace crates (`planner_data`, `planner_core`,
//! `planner_io`); this crate ties them together behind [`GameSession`].

pub mod model;

pub use model::session::GameSession;
pub use planner_core::init_logging;
