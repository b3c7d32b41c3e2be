use crate::domain::model::{FetchedPage, Listing, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn page_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_secs(&self) -> u64;
    fn output_format(&self) -> OutputFormat;
}

/// The three phases of one scrape run. `extract` is synchronous: parsing a
/// fetched page touches no IO, and the parsed DOM must not be held across an
/// await point.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<FetchedPage>;
    fn extract(&self, page: &FetchedPage) -> Result<Vec<Listing>>;
    async fn export(&self, listings: &[Listing]) -> Result<String>;
}
