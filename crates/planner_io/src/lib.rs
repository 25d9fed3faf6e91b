//! # Planner IO
//!
//! I/O layer for the Mutation Planner engine.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - The compact board export format (RLE + base64)
//! - JSON catalog and TOML settings loading

/// Board export/import string codec
pub mod codec;
/// Error types and result aliases for I/O operations
pub mod error;
/// JSON and TOML loading helpers
pub mod serialization;

pub use codec::{decode_board, decode_cells, encode_board, EncodedBoard};
pub use error::{IoError, Result};
pub use serialization::{
    catalog_from_json, from_json, load_app_config, load_catalog, read_json_file,
    to_json_pretty, write_json_file,
};
