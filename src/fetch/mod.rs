pub mod models;
#[cfg(test)]
mod tests;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::AppError;
use models::RawPage;

/// Retrieves one page of raw viewing records.
///
/// The pagination driver owns the page index and increments it; an
/// implementation holds no state across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: usize) -> Result<RawPage, AppError>;
}

/// reqwest-backed fetcher for the viewing-activity endpoint.
///
/// `base_url` is an opaque authenticated URL (auth token already embedded);
/// the client only appends the page parameter.
pub struct HistoryClient {
    client: Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(base_url: String, config: &FetchConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    fn page_url(&self, page: usize) -> String {
        format!("{}&pg={}", self.base_url, page)
    }
}

#[async_trait]
impl PageFetcher for HistoryClient {
    async fn fetch_page(&self, page: usize) -> Result<RawPage, AppError> {
        let response = self.client.get(self.page_url(page)).send().await?;

        if !response.status().is_success() {
            return Err(AppError::FetchError {
                page,
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
