//! Plain data shared by the engine, codec and session layers.

pub mod board;
pub mod catalog;
pub mod lenient;
pub mod mutation;
pub mod piece;
