use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::core::{FetchedPage, Listing};
use crate::utils::error::{Result, ScrapeError};

/// Built-in selectors. They describe a generic product grid and are meant to
/// be overridden per site through a profile.
pub const DEFAULT_ITEM_SELECTOR: &str = ".product-item";
pub const DEFAULT_NAME_SELECTOR: &str = ".product-name";
pub const DEFAULT_PRICE_SELECTOR: &str = ".product-price";
pub const DEFAULT_LINK_SELECTOR: &str = "a";

/// A compiled CSS selector paired with its source text, so field misses can
/// name the selector that produced them.
#[derive(Debug, Clone)]
pub struct FieldSelector {
    css: String,
    selector: Selector,
}

impl FieldSelector {
    pub fn parse(css: &str) -> Result<Self> {
        let selector = Selector::parse(css).map_err(|e| ScrapeError::SelectorError {
            css: css.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            css: css.to_string(),
            selector,
        })
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// The four selectors that drive one extraction pass: the item selector finds
/// the per-product nodes, the other three run inside each node.
#[derive(Debug, Clone)]
pub struct SelectorSet {
    pub item: FieldSelector,
    pub name: FieldSelector,
    pub price: FieldSelector,
    pub link: FieldSelector,
}

impl SelectorSet {
    pub fn new(item: &str, name: &str, price: &str, link: &str) -> Result<Self> {
        Ok(Self {
            item: FieldSelector::parse(item)?,
            name: FieldSelector::parse(name)?,
            price: FieldSelector::parse(price)?,
            link: FieldSelector::parse(link)?,
        })
    }

    pub fn defaults() -> Self {
        Self::new(
            DEFAULT_ITEM_SELECTOR,
            DEFAULT_NAME_SELECTOR,
            DEFAULT_PRICE_SELECTOR,
            DEFAULT_LINK_SELECTOR,
        )
        .expect("built-in selectors parse")
    }
}

/// Why one item node yielded no listing. Recovered per item: the node is
/// skipped with a log line and extraction moves on to the next node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("no element matched `{selector}`")]
    NoMatch { selector: String },

    #[error("element matched by `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: String, attribute: String },
}

/// Turns a fetched page into listings: one pass over the item nodes, three
/// field lookups per node. An item missing any field never produces a partial
/// listing.
pub struct ListingExtractor {
    selectors: SelectorSet,
}

impl ListingExtractor {
    pub fn new(selectors: SelectorSet) -> Self {
        Self { selectors }
    }

    /// Listings in document order of their item nodes.
    pub fn extract(&self, page: &FetchedPage) -> Vec<Listing> {
        let body = page.body_text();
        let document = Html::parse_document(&body);

        let mut listings = Vec::new();
        for (index, item) in document.select(&self.selectors.item.selector).enumerate() {
            match self.extract_item(&item) {
                Ok(listing) => listings.push(listing),
                Err(e) => {
                    // 單筆失敗只記錄並跳過，整批繼續
                    tracing::warn!("Skipping item {}: {}", index, e);
                }
            }
        }

        listings
    }

    fn extract_item(&self, item: &ElementRef<'_>) -> std::result::Result<Listing, FieldError> {
        let name = select_text(item, &self.selectors.name)?;
        let price = select_text(item, &self.selectors.price)?;
        let link = select_attr(item, &self.selectors.link, "href")?;

        Ok(Listing { name, price, link })
    }
}

/// Trimmed text content of the first descendant matching `field`.
fn select_text(
    item: &ElementRef<'_>,
    field: &FieldSelector,
) -> std::result::Result<String, FieldError> {
    item.select(&field.selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| FieldError::NoMatch {
            selector: field.css.clone(),
        })
}

/// An attribute of the first descendant matching `field`. The first match is
/// binding: if it lacks the attribute the item fails, even when a later match
/// carries one.
fn select_attr(
    item: &ElementRef<'_>,
    field: &FieldSelector,
    attribute: &str,
) -> std::result::Result<String, FieldError> {
    let element = item
        .select(&field.selector)
        .next()
        .ok_or_else(|| FieldError::NoMatch {
            selector: field.css.clone(),
        })?;

    element
        .value()
        .attr(attribute)
        .map(|value| value.to_string())
        .ok_or_else(|| FieldError::MissingAttribute {
            selector: field.css.clone(),
            attribute: attribute.to_string(),
        })
}
