use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Page request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Page request returned HTTP status {status}")]
    HttpStatusError { status: u16 },

    #[error("Invalid CSS selector `{css}`: {message}")]
    SelectorError { css: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: `{value}` ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScrapeError {
    /// Console-facing message, stripped of debug detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::RequestError(e) => {
                format!("Could not reach the page: {}", e)
            }
            ScrapeError::HttpStatusError { status } => {
                format!("Failed to retrieve the webpage. Status code: {}", status)
            }
            ScrapeError::SelectorError { css, .. } => {
                format!("The CSS selector `{}` is not valid", css)
            }
            ScrapeError::CsvError(_) | ScrapeError::IoError(_) => {
                format!("Could not write the output file: {}", self)
            }
            ScrapeError::ConfigError { message } => message.clone(),
            ScrapeError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    /// One-line hint shown under the error message on the console.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::RequestError(_) => "Check the network connection and the page URL",
            ScrapeError::HttpStatusError { .. } => {
                "Open the URL in a browser; listing pages move, expire, or sit behind bot checks"
            }
            ScrapeError::SelectorError { .. } => {
                "Fix the selector in the site profile, then run again"
            }
            ScrapeError::CsvError(_) | ScrapeError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and run again (--help lists the options)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
