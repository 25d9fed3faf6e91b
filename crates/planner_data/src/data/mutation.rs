use serde::{Deserialize, Serialize};

/// Stable index of a mutation type inside its catalog.
pub type MutationId = u32;

/// Crop category. Anything other than `mutated` behaves like a base crop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Regular crop (`"basecrop"`).
    #[default]
    BaseCrop,
    /// Mutation that starts fully grown and cannot be collected when player placed.
    Mutated,
    /// Any other tag from the configuration, kept for display.
    Other(String),
}

impl Category {
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("basecrop") => Category::BaseCrop,
            Some("mutated") => Category::Mutated,
            Some(other) => Category::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::BaseCrop => "basecrop",
            Category::Mutated => "mutated",
            Category::Other(tag) => tag,
        }
    }

    #[must_use]
    pub fn is_mutated(&self) -> bool {
        matches!(self, Category::Mutated)
    }
}

/// Growth and harvest behaviour of a mutation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrowthProfile {
    /// Grows to `max_growth_stage` and stays there.
    #[default]
    Standard,
    /// Cycles 1..max-1 and is only harvestable on two stages of the cycle.
    Glasscorn,
    /// Starts very mature and yields in steps of its growth stage.
    MagicJerrybean,
}

impl GrowthProfile {
    /// Maps a `specialEffect` tag. Unrecognised tags have no effect.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("glasscorn") => GrowthProfile::Glasscorn,
            Some("magic_jerrybean") => GrowthProfile::MagicJerrybean,
            _ => GrowthProfile::Standard,
        }
    }

    #[must_use]
    pub fn tag(self) -> Option<&'static str> {
        match self {
            GrowthProfile::Standard => None,
            GrowthProfile::Glasscorn => Some("glasscorn"),
            GrowthProfile::MagicJerrybean => Some("magic_jerrybean"),
        }
    }
}

/// One neighbour requirement: at least `min_count` grid cells of `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnCondition {
    #[serde(rename = "id")]
    pub required: MutationId,
    #[serde(rename = "amount")]
    pub min_count: u32,
}

/// Normalized, immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationType {
    pub id: MutationId,
    pub name: String,
    pub image: Option<String>,
    /// Footprint side length, 1 to 3.
    pub size: u8,
    /// Score contribution per configured score parameter.
    pub params: Vec<f64>,
    /// AND-combined spawn requirements; empty means player-placeable only.
    pub conditions: Vec<SpawnCondition>,
    pub category: Category,
    /// 0 means the crop is always fully grown.
    pub max_growth_stage: u32,
    pub growth: GrowthProfile,
}

impl MutationType {
    #[must_use]
    pub fn spawns_autonomously(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Score contribution for the given parameter, 0 when missing.
    #[must_use]
    pub fn param(&self, index: usize) -> f64 {
        self.params.get(index).copied().unwrap_or(0.0)
    }
}
