use crate::core::extract::{ListingExtractor, SelectorSet};
use crate::core::fetch::PageFetcher;
use crate::core::{export, ConfigProvider, FetchedPage, Listing, Pipeline, Storage};
use crate::utils::error::Result;

/// The one-page scrape pipeline: a single fetch, one extraction pass over the
/// parsed document, one table written through storage.
pub struct PageScrapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: PageFetcher,
    extractor: ListingExtractor,
}

impl<S: Storage, C: ConfigProvider> PageScrapePipeline<S, C> {
    pub fn new(storage: S, config: C, selectors: SelectorSet) -> Result<Self> {
        let fetcher = PageFetcher::new(config.user_agent(), config.timeout_secs())?;

        Ok(Self {
            storage,
            config,
            fetcher,
            extractor: ListingExtractor::new(selectors),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PageScrapePipeline<S, C> {
    async fn fetch(&self) -> Result<FetchedPage> {
        tracing::debug!("Fetching listing page: {}", self.config.page_url());
        let page = self.fetcher.fetch(self.config.page_url()).await?;
        tracing::debug!("Fetched {} bytes", page.body.len());

        Ok(page)
    }

    fn extract(&self, page: &FetchedPage) -> Result<Vec<Listing>> {
        let listings = self.extractor.extract(page);
        tracing::debug!("Extracted {} listings", listings.len());

        Ok(listings)
    }

    async fn export(&self, listings: &[Listing]) -> Result<String> {
        let format = self.config.output_format();
        let filename = export::output_filename(format);
        let table = export::render_table(listings, format)?;

        tracing::debug!("💾 Writing table ({} bytes) to {}", table.len(), filename);
        self.storage.write_file(&filename, &table).await?;

        Ok(format!("{}/{}", self.config.output_path(), filename))
    }
}
