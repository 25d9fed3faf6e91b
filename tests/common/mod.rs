#![allow(dead_code)]

pub mod macros;

use mutation_planner_lib::model::catalog::Catalog;
use mutation_planner_lib::model::config::AppConfig;
use mutation_planner_lib::model::state::CatalogConfig;
use mutation_planner_lib::GameSession;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Score params `wheat`, `carrot`. Ids are positional:
///
/// | id | name      | size | category | spawns from           |
/// |----|-----------|------|----------|-----------------------|
/// | 0  | Wheat     | 1    | basecrop | -                     |
/// | 1  | Carrot    | 1    | basecrop | -                     |
/// | 2  | Sprout    | 1    | mutated  | 1 wheat               |
/// | 3  | Melon     | 2    | mutated  | 2 wheat               |
/// | 4  | Glasscorn | 1    | mutated  | 3 carrot              |
/// | 5  | Jerrybean | 1    | mutated  | 1 wheat + 1 carrot    |
/// | 6  | Oak       | 3    | basecrop | -                     |
pub const SAMPLE_CATALOG: &str = r#"{
    "scoreParams": ["wheat", "carrot"],
    "scoreParamNames": {"wheat": "Wheat", "carrot": "Carrot"},
    "cards": [
        {"name": "Wheat", "size": 1, "category": "basecrop", "maxGrowthStage": 4, "wheat": 10},
        {"name": "Carrot", "size": 1, "category": "basecrop", "maxGrowthStage": 3, "carrot": 6},
        {"name": "Sprout", "size": 1, "category": "mutated", "maxGrowthStage": 2,
         "scores": {"wheat": 4}, "conditions": [{"id": 0, "amount": 1}]},
        {"name": "Melon", "size": 2, "category": "mutated", "maxGrowthStage": 2,
         "scores": {"wheat": 25, "carrot": 5}, "conditions": [{"id": 0, "amount": 2}]},
        {"name": "Glasscorn", "size": 1, "category": "mutated", "maxGrowthStage": 9,
         "specialEffect": "glasscorn", "scores": {"wheat": 7},
         "spawnCondition": {"conditions": [{"id": 1, "amount": 3}]}},
        {"name": "Jerrybean", "size": 1, "category": "mutated", "maxGrowthStage": 200,
         "specialEffect": "magic_jerrybean", "scores": {"wheat": 2},
         "conditions": [{"id": 0, "amount": 1}, {"id": 1, "amount": 1}]},
        {"name": "Oak", "size": 3, "category": "basecrop", "maxGrowthStage": 1, "wheat": 9}
    ]
}"#;

pub const WHEAT: u32 = 0;
pub const CARROT: u32 = 1;
pub const SPROUT: u32 = 2;
pub const MELON: u32 = 3;
pub const GLASSCORN: u32 = 4;
pub const JERRYBEAN: u32 = 5;
pub const OAK: u32 = 6;

pub fn sample_catalog() -> Catalog {
    let config: CatalogConfig =
        serde_json::from_str(SAMPLE_CATALOG).expect("sample catalog is valid JSON");
    Catalog::from_config(&config)
}

pub struct SessionBuilder {
    config: AppConfig,
    catalog_json: String,
    seed: u64,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            catalog_json: SAMPLE_CATALOG.to_string(),
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.config.simulation.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_catalog_json(mut self, json: &str) -> Self {
        self.catalog_json = json.to_string();
        self
    }

    /// Simulation mode with every eligible spawn accepted.
    pub fn simulating(self) -> Self {
        self.with_config(|c| {
            c.simulation.simulation_mode = true;
            c.simulation.spawn_acceptance = 1.0;
        })
    }

    pub fn build(self) -> GameSession<ChaCha8Rng> {
        let config: CatalogConfig =
            serde_json::from_str(&self.catalog_json).expect("catalog JSON must parse");
        GameSession::with_rng(
            Catalog::from_config(&config),
            self.config,
            ChaCha8Rng::seed_from_u64(self.seed),
        )
        .expect("builder config must validate")
    }
}
