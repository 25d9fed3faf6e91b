//! Configuration document shapes as they arrive from the catalog JSON.
//!
//! Field names follow the document (`scoreParams`, `spawnCondition`, ...).
//! Everything is optional; normalization fills in defaults.

use crate::data::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Parsed configuration document.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score_params: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score_param_names: HashMap<String, String>,
    /// An unreadable card becomes an empty one so later ids keep their position.
    #[serde(default, alias = "mutations", deserialize_with = "lenient::entries")]
    pub cards: Vec<RawMutation>,
}

/// One raw catalog entry. Older documents put score values at the top level
/// (`{"wheat": 3}`) instead of under `scores`, and spawn conditions under
/// `spawnCondition.conditions` instead of `conditions`.
///
/// A field holding a value of the wrong type reads as absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMutation {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub size: Option<i64>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub scores: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::conditions")]
    pub conditions: Option<Vec<RawSpawnCondition>>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub spawn_condition: Option<RawSpawnBlock>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub max_growth_stage: Option<u32>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub special_effect: Option<String>,
    /// Remaining top-level keys, where legacy score values live.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawSpawnBlock {
    #[serde(default, deserialize_with = "lenient::condition_list")]
    pub conditions: Vec<RawSpawnCondition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct RawSpawnCondition {
    pub id: u32,
    #[serde(default)]
    pub amount: u32,
}

impl RawMutation {
    /// Score for `param`: `scores[param]` first, then the top-level key, else 0.
    #[must_use]
    pub fn score_for(&self, param: &str) -> f64 {
        self.scores
            .as_ref()
            .and_then(|scores| scores.get(param))
            .or_else(|| self.extra.get(param))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Spawn conditions from either document shape.
    #[must_use]
    pub fn spawn_conditions(&self) -> &[RawSpawnCondition] {
        if let Some(conditions) = &self.conditions {
            return conditions;
        }
        self.spawn_condition
            .as_ref()
            .map(|block| block.conditions.as_slice())
            .unwrap_or(&[])
    }
}
