//! Session configuration.
//!
//! These structures map to the `planner.toml` file. Every section has a
//! `Default` impl, so a partial file only overrides what it names.
//!
//! ## Example `planner.toml`
//!
//! ```toml
//! [simulation]
//! simulation_mode = true
//! score_param_index = 0
//! spawn_acceptance = 0.25
//! seed = 42
//!
//! [modifiers]
//! fortune = 120.0
//! chips = 15.0
//! gh_upgrade_level = 9
//! unique_buff_level = 4
//!
//! [history]
//! capacity = 50
//! ```

use serde::{Deserialize, Serialize};

/// Highest greenhouse upgrade level.
pub const MAX_GH_UPGRADE_LEVEL: u8 = 9;
/// Highest unique-crop buff level.
pub const MAX_UNIQUE_BUFF_LEVEL: u8 = 12;

/// Rules that stay fixed for the duration of one tick or placement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Enables growth stages.
    pub simulation_mode: bool,
    /// Scores as if every piece were collectable and fully grown.
    pub evaluation_mode: bool,
    /// Index into the catalog's score parameters.
    pub score_param_index: usize,
    /// Chance that an eligible spawn happens while simulating.
    pub spawn_acceptance: f64,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation_mode: false,
            evaluation_mode: false,
            score_param_index: 0,
            spawn_acceptance: 0.25,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Probability used for a spawn roll under the current mode.
    #[must_use]
    pub fn effective_spawn_acceptance(&self) -> f64 {
        if self.simulation_mode {
            self.spawn_acceptance
        } else {
            1.0
        }
    }
}

/// Global score modifiers applied after the base yield is summed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModifierConfig {
    /// Percentage bonus.
    pub fortune: f64,
    /// Percentage bonus.
    pub chips: f64,
    pub gh_upgrade_level: u8,
    pub unique_buff_level: u8,
    pub additive_buff_base: f64,
    pub multiplicative_buff_base: f64,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            fortune: 0.0,
            chips: 0.0,
            gh_upgrade_level: 0,
            unique_buff_level: 0,
            additive_buff_base: 1.0,
            multiplicative_buff_base: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub modifiers: ModifierConfig,
    pub history: HistoryConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.simulation.spawn_acceptance),
            "Spawn acceptance must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            self.modifiers.gh_upgrade_level <= MAX_GH_UPGRADE_LEVEL,
            "Greenhouse upgrade level too high (max {MAX_GH_UPGRADE_LEVEL})"
        );
        anyhow::ensure!(
            self.modifiers.unique_buff_level <= MAX_UNIQUE_BUFF_LEVEL,
            "Unique buff level too high (max {MAX_UNIQUE_BUFF_LEVEL})"
        );
        anyhow::ensure!(
            self.modifiers.fortune.is_finite() && self.modifiers.fortune >= 0.0,
            "Fortune must be non-negative"
        );
        anyhow::ensure!(
            self.modifiers.chips.is_finite() && self.modifiers.chips >= 0.0,
            "Chips must be non-negative"
        );
        anyhow::ensure!(
            self.modifiers.additive_buff_base.is_finite(),
            "Additive buff base must be finite"
        );
        anyhow::ensure!(
            self.modifiers.multiplicative_buff_base.is_finite()
                && self.modifiers.multiplicative_buff_base >= 0.0,
            "Multiplicative buff base must be non-negative"
        );

        anyhow::ensure!(self.history.capacity > 0, "History capacity must be positive");

        Ok(())
    }

    /// Parses and validates a `planner.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of the settings that change simulation or score outcomes.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.modifiers).as_bytes());
        hex::encode(hasher.finalize())
    }
}
