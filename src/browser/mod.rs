mod chrome;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app::Result;

pub use chrome::ChromeSession;

/// Settings for the shared browser session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Run the browser without a visible window (default: true).
    pub headless: bool,

    /// Settling wait after the load event, in milliseconds, as a proxy
    /// for "page fully rendered" (default: 1000).
    pub settle_ms: u64,

    /// User agent string to present to detail pages.
    pub user_agent: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            settle_ms: 1000,
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl SessionConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Capability boundary over the rendered-page source. One session holds
/// one location at a time, which is why reconciliation processes items
/// strictly in sequence.
#[async_trait]
pub trait BrowserSession {
    /// Navigate to `url`, wait for the page to settle, and return the
    /// rendered content.
    async fn navigate_and_render(&self, url: &str) -> Result<String>;
}
