pub mod core;
pub mod dom;
pub mod extract;
pub mod fetch;
pub mod scrape;

// --- Primary exports ---
pub use crate::core::error::ExtractError;
pub use crate::core::types;
pub use crate::core::types::*;
pub use dom::{DomNode, HtmlDocument};
pub use extract::{
    extract_fields, extract_from_html, extract_page, extract_product, profile_for, run_profile,
};
pub use fetch::{HttpFetcher, PageFetcher};
pub use scrape::{scrape_many, scrape_product};
