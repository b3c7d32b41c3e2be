pub mod engine;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod pipeline;

pub use crate::domain::model::{FetchedPage, Listing, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
