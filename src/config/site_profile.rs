use crate::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::core::extract::{
    SelectorSet, DEFAULT_ITEM_SELECTOR, DEFAULT_LINK_SELECTOR, DEFAULT_NAME_SELECTOR,
    DEFAULT_PRICE_SELECTOR,
};
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-site scrape profile loaded from TOML. The selector block exists
/// because the built-in selectors describe a generic grid; real sites need
/// their own classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
    pub site: SiteConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub url: String,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub item: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: Option<OutputFormat>,
}

impl SiteProfile {
    /// 從 TOML 檔案載入設定檔
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定檔
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LISTING_URL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 驗證設定檔的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("site.url", &self.site.url)?;
        crate::utils::validation::validate_path("output.path", &self.output.path)?;

        if let Some(user_agent) = &self.site.user_agent {
            crate::utils::validation::validate_non_empty_string("site.user_agent", user_agent)?;
        }

        if let Some(timeout) = self.site.timeout_seconds {
            crate::utils::validation::validate_range("site.timeout_seconds", timeout, 1, 300)?;
        }

        Ok(())
    }

    /// Selector set with the profile's overrides applied over the built-ins.
    pub fn selector_set(&self) -> Result<SelectorSet> {
        SelectorSet::new(
            self.selectors.item.as_deref().unwrap_or(DEFAULT_ITEM_SELECTOR),
            self.selectors.name.as_deref().unwrap_or(DEFAULT_NAME_SELECTOR),
            self.selectors
                .price
                .as_deref()
                .unwrap_or(DEFAULT_PRICE_SELECTOR),
            self.selectors.link.as_deref().unwrap_or(DEFAULT_LINK_SELECTOR),
        )
    }
}

impl ConfigProvider for SiteProfile {
    fn page_url(&self) -> &str {
        &self.site.url
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn user_agent(&self) -> &str {
        self.site.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn timeout_secs(&self) -> u64 {
        self.site.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl Validate for SiteProfile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
