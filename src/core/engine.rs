use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through its three phases in order, one page per run.
pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting scrape...");

        // Fetch
        println!("Fetching page...");
        let page = self.pipeline.fetch().await?;
        println!("Fetched {} bytes (status {})", page.body.len(), page.status);
        self.monitor.log_stats("Fetch");

        // Extract
        println!("Extracting listings...");
        let listings = self.pipeline.extract(&page)?;
        println!("Extracted {} listings", listings.len());
        self.monitor.log_stats("Extract");

        // Export
        println!("Exporting data...");
        let output_path = self.pipeline.export(&listings).await?;
        println!("Data saved to: {}", output_path);
        self.monitor.log_stats("Export");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FetchedPage, Listing};
    use crate::utils::error::ScrapeError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted pipeline that records how far the engine got.
    struct ScriptedPipeline {
        fail_fetch: bool,
        phases_run: AtomicUsize,
    }

    impl ScriptedPipeline {
        fn new(fail_fetch: bool) -> Self {
            Self {
                fail_fetch,
                phases_run: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for ScriptedPipeline {
        async fn fetch(&self) -> Result<FetchedPage> {
            self.phases_run.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch {
                return Err(ScrapeError::HttpStatusError { status: 404 });
            }
            Ok(FetchedPage {
                status: 200,
                body: b"<html></html>".to_vec(),
            })
        }

        fn extract(&self, _page: &FetchedPage) -> Result<Vec<Listing>> {
            self.phases_run.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Listing {
                name: "Widget Pro".to_string(),
                price: "$9.99".to_string(),
                link: "/p/widget-pro".to_string(),
            }])
        }

        async fn export(&self, listings: &[Listing]) -> Result<String> {
            self.phases_run.fetch_add(1, Ordering::SeqCst);
            Ok(format!("out/{}-listings.csv", listings.len()))
        }
    }

    #[tokio::test]
    async fn run_executes_all_phases_in_order() {
        let pipeline = ScriptedPipeline::new(false);
        let engine = ScrapeEngine::new(pipeline);

        let output_path = engine.run().await.unwrap();

        assert_eq!(output_path, "out/1-listings.csv");
        assert_eq!(engine.pipeline.phases_run.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn run_stops_at_first_failing_phase() {
        let pipeline = ScriptedPipeline::new(true);
        let engine = ScrapeEngine::new(pipeline);

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, ScrapeError::HttpStatusError { status: 404 }));
        assert_eq!(engine.pipeline.phases_run.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn monitoring_engine_runs_to_completion() {
        let pipeline = ScriptedPipeline::new(false);
        let engine = ScrapeEngine::new_with_monitoring(pipeline, true);

        assert!(engine.run().await.is_ok());
    }
}
