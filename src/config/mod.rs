pub mod cli;
pub mod site_profile;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

/// Page and User-Agent a bare run targets. The URL points at a public deals
/// listing; the User-Agent mimics a desktop Chrome, since the site refuses
/// obvious non-browser clients.
pub const DEFAULT_PAGE_URL: &str =
    "https://deals.sharewareonsale.com/collections/apps-software/utilities?page=3";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "listing-scrape")]
#[command(about = "Scrapes one product listing page into a CSV/TSV table")]
pub struct CliConfig {
    /// Listing page to fetch
    #[arg(long, default_value = DEFAULT_PAGE_URL)]
    pub url: String,

    /// Directory the output table is written into
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// User-Agent header sent with the page request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Output table format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// TOML site profile overriding URL, selectors and output settings
    #[arg(long)]
    pub profile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log system resource usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn page_url(&self) -> &str {
        &self.url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("url", &self.url)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        validation::validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        Ok(())
    }
}
