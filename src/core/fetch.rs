use std::time::Duration;

use reqwest::Client;

use crate::core::FetchedPage;
use crate::utils::error::{Result, ScrapeError};

/// Issues the single page request: one client, one GET, no retries.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Builds the HTTP client. The User-Agent is sent with every request;
    /// listing sites routinely refuse clients without a browser-looking one.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// GET the page. Any status other than 200 aborts the run before parsing
    /// starts; the status code travels inside the error.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        tracing::debug!("Requesting page: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("Page response status: {}", status);

        if status != 200 {
            return Err(ScrapeError::HttpStatusError { status });
        }

        let body = response.bytes().await?.to_vec();
        Ok(FetchedPage { status, body })
    }
}
