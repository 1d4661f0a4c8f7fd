// src/utils/http.rs

//! HTTP client utilities and the live page source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::CrawlerConfig;
use crate::error::Result;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Source of raw page markup, keyed by page number.
///
/// The orchestrator only ever needs this one operation, so tests can swap
/// in canned documents without any network.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw markup for one listing page. HTTP-level failures are
    /// fatal; no retries happen at this seam.
    async fn fetch(&self, page: u32) -> Result<String>;
}

/// Live page source targeting a profile listing URL.
pub struct HttpPageSource {
    client: Client,
    base: Url,
}

impl HttpPageSource {
    /// Create a page source for the given profile URL. Any existing query
    /// string is replaced per page.
    pub fn new(client: Client, profile_url: &str) -> Result<Self> {
        let mut base = Url::parse(profile_url)?;
        base.set_fragment(None);
        Ok(Self { client, base })
    }

    /// URL for a specific listing page.
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base.clone();
        url.set_query(Some(&format!("page={page}")));
        url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, page: u32) -> Result<String> {
        let url = self.page_url(page);
        log::debug!("GET {url}");
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }
}
