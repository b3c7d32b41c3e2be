use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One product entry pulled off the listing page.
///
/// Field order matters: it is the column order of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    /// Link target exactly as it appears in the markup. Relative hrefs are
    /// kept relative, never resolved against the page URL.
    #[serde(rename = "Link")]
    pub link: String,
}

/// Raw result of the page request: final status plus undecoded body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded for parsing. Invalid UTF-8 is replaced, not fatal.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Flavor of the exported table. Both carry the same three columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }
}
