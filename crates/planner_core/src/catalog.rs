//! Mutation catalog and the normalizer that builds it from raw configuration.

use planner_data::{
    CatalogConfig, Category, GrowthProfile, MutationId, MutationType, RawMutation, SpawnCondition,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display name used when the selected score parameter does not exist.
pub const MISSING_PARAM_NAME: &str = "—";

/// Normalizes one raw entry.
///
/// The id is the entry's catalog position when given, otherwise its explicit
/// `id` field, otherwise 0. Missing scores become 0, missing conditions mean
/// "never spawns", and size falls back to 1 when absent or outside 1..=3.
#[must_use]
pub fn normalize_mutation(
    raw: &RawMutation,
    score_params: &[String],
    position: Option<usize>,
) -> MutationType {
    let id = position
        .map(|p| p as MutationId)
        .or(raw.id)
        .unwrap_or_default();

    let size = match raw.size {
        Some(size @ 1..=3) => size as u8,
        None => 1,
        Some(other) => {
            tracing::warn!(id, size = other, "Unsupported mutation size, using 1");
            1
        }
    };

    let growth = GrowthProfile::from_tag(raw.special_effect.as_deref());
    if growth == GrowthProfile::Standard {
        if let Some(tag) = raw.special_effect.as_deref() {
            tracing::debug!(id, effect = tag, "Ignoring unknown special effect");
        }
    }

    MutationType {
        id,
        name: raw.name.clone().unwrap_or_default(),
        image: raw.image.clone(),
        size,
        params: score_params.iter().map(|p| raw.score_for(p)).collect(),
        conditions: raw
            .spawn_conditions()
            .iter()
            .map(|c| SpawnCondition {
                required: c.id,
                min_count: c.amount,
            })
            .collect(),
        category: Category::from_tag(raw.category.as_deref()),
        max_growth_stage: raw.max_growth_stage.unwrap_or(1),
        growth,
    }
}

/// The selected score parameter, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreParam {
    pub index: usize,
    pub key: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    types: Vec<MutationType>,
    score_params: Vec<String>,
    score_param_names: HashMap<String, String>,
}

impl Catalog {
    /// Builds a catalog from a parsed configuration document. Ids are positional.
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        let types = config
            .cards
            .iter()
            .enumerate()
            .map(|(i, raw)| normalize_mutation(raw, &config.score_params, Some(i)))
            .collect::<Vec<_>>();
        tracing::debug!(
            mutations = types.len(),
            score_params = config.score_params.len(),
            "Catalog normalized"
        );
        Self {
            types,
            score_params: config.score_params.clone(),
            score_param_names: config.score_param_names.clone(),
        }
    }

    /// Builds a catalog from already-normalized types.
    #[must_use]
    pub fn new(types: Vec<MutationType>, score_params: Vec<String>) -> Self {
        Self {
            types,
            score_params,
            score_param_names: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, id: MutationId) -> Option<&MutationType> {
        self.types.get(id as usize).filter(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutationType> {
        self.types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    #[must_use]
    pub fn score_params(&self) -> &[String] {
        &self.score_params
    }

    /// Key and display name of a score parameter. The name falls back to the
    /// key, and to a dash when the index is out of range.
    #[must_use]
    pub fn score_param(&self, index: usize) -> ScoreParam {
        let key = self.score_params.get(index).cloned();
        let name = key
            .as_ref()
            .map(|k| self.score_param_names.get(k).cloned().unwrap_or_else(|| k.clone()))
            .unwrap_or_else(|| MISSING_PARAM_NAME.to_string());
        ScoreParam { index, key, name }
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&MutationType> {
        self.types.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Types referenced by `id`'s spawn conditions, in condition order.
    #[must_use]
    pub fn requirements(&self, id: MutationId) -> Vec<&MutationType> {
        self.get(id)
            .map(|t| {
                t.conditions
                    .iter()
                    .filter_map(|c| self.get(c.required))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Types whose spawn conditions reference `id`.
    #[must_use]
    pub fn dependents(&self, id: MutationId) -> Vec<&MutationType> {
        self.types
            .iter()
            .filter(|t| t.conditions.iter().any(|c| c.required == id))
            .collect()
    }
}
