use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{Result, ToondexError};
use crate::config::Config;
use crate::listing::{HttpListingClient, ListingClient};
use crate::store::SqliteStore;

/// Process-wide composition root. The store connection and the listing
/// client are built once at startup and injected everywhere they are
/// needed; the browser session is launched per ingest run because it is
/// only useful while reconciling.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<SqliteStore>,
    pub listing: Arc<dyn ListingClient + Send + Sync>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let db_path = match config.store.db_path.clone() {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let listing: Arc<dyn ListingClient + Send + Sync> =
            Arc::new(HttpListingClient::new(&config.listing.endpoint)?);

        Ok(Self {
            config,
            store,
            listing,
        })
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        let listing: Arc<dyn ListingClient + Send + Sync> =
            Arc::new(HttpListingClient::new(&config.listing.endpoint)?);

        Ok(Self {
            config,
            store,
            listing,
        })
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| ToondexError::Config("Could not find data directory".into()))?;
        let toondex_dir = data_dir.join("toondex");
        std::fs::create_dir_all(&toondex_dir)?;
        Ok(toondex_dir.join("media.db"))
    }
}
