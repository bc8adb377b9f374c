pub mod config;
pub mod constants;
pub mod migrator;
pub mod models;
pub mod routes;
pub mod storage;
pub mod utils;

use config::Config;
use sea_orm::DatabaseConnection;
use storage::ImageStore;

/// Shared by every request handler and the orphan sweep.
pub struct AppState {
    pub db: DatabaseConnection,
    pub env: Config,
    /// Client for the news API, carries the outbound timeout.
    pub http: reqwest::Client,
    pub store: ImageStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, env: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(env.news_timeout)
            .build()?;
        let store = ImageStore::new(env.images_dir());

        Ok(Self {
            db,
            env,
            http,
            store,
        })
    }
}
