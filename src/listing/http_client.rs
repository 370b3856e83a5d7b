use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::domain::{ListingRecord, Service, UpdateDay};
use crate::listing::{ListingClient, ListingFetch};

/// Response body of the listing API.
#[derive(Debug, Deserialize)]
struct ListingPage {
    #[serde(default)]
    webtoons: Vec<ListingRecord>,
}

pub struct HttpListingClient {
    client: Client,
    endpoint: Url,
}

impl HttpListingClient {
    /// The endpoint is validated once here; a malformed configured URL
    /// fails at startup instead of on the first fetch.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .user_agent("toondex/0.1.0")
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ListingClient for HttpListingClient {
    async fn fetch(
        &self,
        page: u32,
        service: Service,
        update_day: UpdateDay,
    ) -> Result<ListingFetch> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("page", page.to_string().as_str()),
                ("service", service.as_str()),
                ("updateDay", update_day.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, %service, %update_day, page, "listing upstream returned non-success");
            return Ok(ListingFetch::Degraded {
                status: status.as_u16(),
            });
        }

        let body: ListingPage = response.json().await?;
        debug!(count = body.webtoons.len(), %service, %update_day, page, "fetched listing page");

        Ok(ListingFetch::Listed(body.webtoons))
    }
}
