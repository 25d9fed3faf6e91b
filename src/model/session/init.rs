use crate::model::catalog::Catalog;
use crate::model::config::AppConfig;
use crate::model::history::{History, Snapshot};
use crate::model::session::GameSession;
use planner_core::board::Board;
use planner_core::placement::PlacementIds;
use planner_data::CatalogConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl GameSession<ChaCha8Rng> {
    /// Creates a session from a parsed catalog document.
    pub fn new(catalog_config: &CatalogConfig, config: AppConfig) -> anyhow::Result<Self> {
        Self::from_catalog(Catalog::from_config(catalog_config), config)
    }

    /// Creates a session whose RNG is seeded from `config.simulation.seed`,
    /// or from entropy when no seed is set.
    pub fn from_catalog(catalog: Catalog, config: AppConfig) -> anyhow::Result<Self> {
        let rng = if let Some(seed) = config.simulation.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(catalog, config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session with an explicit random source.
    ///
    /// The board starts empty and is recorded as the first history entry.
    pub fn with_rng(catalog: Catalog, config: AppConfig, rng: R) -> anyhow::Result<Self> {
        config.validate()?;
        let board = Board::new();
        let placement_ids = PlacementIds::new();
        let history = History::new(
            Snapshot {
                board: board.clone(),
                placement_ids,
            },
            config.history.capacity,
        );
        tracing::info!(
            mutations = catalog.len(),
            score_params = catalog.score_params().len(),
            config = %config.fingerprint(),
            "Session created"
        );
        Ok(Self {
            board,
            placement_ids,
            catalog,
            config,
            history,
            rng,
        })
    }
}
