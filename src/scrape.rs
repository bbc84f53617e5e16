//! Fetch-then-extract glue used by the CLI.

use futures::future::join_all;
use tracing::{info, warn};

use crate::core::error::ExtractError;
use crate::core::types::{ProductPage, Site};
use crate::extract::extract_page;
use crate::fetch::PageFetcher;

/// Fetch one product page and extract it. Unsupported hosts are rejected
/// before any request is made.
pub async fn scrape_product(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> anyhow::Result<ProductPage> {
    let site =
        Site::from_url(url).ok_or_else(|| ExtractError::UnsupportedSite(url.to_string()))?;
    let html = fetcher.fetch(url).await?;
    Ok(extract_page(site, url, &html)?)
}

/// Scrape several pages concurrently. Results keep the order of `urls`.
pub async fn scrape_many(
    fetcher: &dyn PageFetcher,
    urls: &[String],
) -> Vec<(String, anyhow::Result<ProductPage>)> {
    info!("scraping {} product pages", urls.len());
    let results = join_all(urls.iter().map(|url| scrape_product(fetcher, url))).await;

    urls.iter()
        .cloned()
        .zip(results)
        .inspect(|(url, result)| {
            if let Err(e) = result {
                warn!("{}: {:#}", url, e);
            }
        })
        .collect()
}
