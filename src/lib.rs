pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::site_profile::SiteProfile;
pub use crate::core::{engine::ScrapeEngine, pipeline::PageScrapePipeline};
pub use domain::model::{FetchedPage, Listing, OutputFormat};
pub use utils::error::{Result, ScrapeError};
