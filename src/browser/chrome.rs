use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tracing::info;

use crate::app::{Result, ToondexError};
use crate::browser::{BrowserSession, SessionConfig};

/// Chrome-backed browser session using chromiumoxide. One page is opened
/// at launch and reused for every navigation of the run.
pub struct ChromeSession {
    // Kept alive for the lifetime of the session; dropping it tears the
    // browser down.
    _browser: Browser,
    page: Page,
    config: SessionConfig,
}

impl ChromeSession {
    pub async fn launch(config: SessionConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-notifications")
            .arg("--disable-extensions");

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| ToondexError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            ToondexError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        // Drive browser events for the session's lifetime.
        tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ToondexError::Browser(format!("Failed to open page: {}", e)))?;

        if let Some(ref ua) = config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| ToondexError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        info!(headless = config.headless, "browser session ready");

        Ok(Self {
            _browser: browser,
            page,
            config,
        })
    }

    pub async fn with_defaults() -> Result<Self> {
        Self::launch(SessionConfig::default()).await
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn navigate_and_render(&self, url: &str) -> Result<String> {
        self.page
            .goto(url)
            .await
            .map_err(|e| ToondexError::Browser(format!("Navigation to {} failed: {}", url, e)))?;

        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| ToondexError::Browser(format!("Load wait for {} failed: {}", url, e)))?;

        // Settle after the load event so late XHR-driven content lands.
        tokio::time::sleep(self.config.settle()).await;

        self.page
            .content()
            .await
            .map_err(|e| ToondexError::Browser(format!("Failed to read content of {}: {}", url, e)))
    }
}
