pub mod http_client;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{ListingRecord, Service, UpdateDay};

pub use http_client::HttpListingClient;

/// Tagged outcome of one listing fetch, so callers can tell "no items on
/// this page" apart from "upstream degraded".
#[derive(Debug)]
pub enum ListingFetch {
    /// The page was served; may legitimately hold zero records.
    Listed(Vec<ListingRecord>),
    /// Non-success status from the listing API. Treated as nothing to
    /// ingest, not as an error.
    Degraded { status: u16 },
}

#[async_trait]
pub trait ListingClient {
    /// Fetch one page of listings for a (service, update-day) pair. No
    /// pagination happens here; callers iterate pages if they want more.
    async fn fetch(
        &self,
        page: u32,
        service: Service,
        update_day: UpdateDay,
    ) -> Result<ListingFetch>;
}
