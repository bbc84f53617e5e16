//! Heuristic field extraction for pharmacy product pages.
//!
//! Each supported site is described by a static [`VariantProfile`]; one
//! generic pipeline builds a text corpus from the parsed page and runs the
//! profile's stages over it in order.

pub mod classify;
pub mod corpus;
pub mod fact_box;
pub mod fallback;
pub mod faq;
pub mod headings;
pub mod images;
pub mod profile;
pub mod safety;
pub mod sites;
pub mod substitutes;

use std::str::FromStr;

use chrono::Utc;
use tracing::{debug, info};
use url::Url;

use crate::core::error::ExtractError;
use crate::core::types::{FieldRecord, ProductPage, Site};
use crate::dom::{DomNode, HtmlDocument};
use profile::{Stage, VariantProfile};

pub use sites::profile_for;

/// Run one site pipeline over a parsed page. Never fails: anything the
/// heuristics cannot place stays absent.
pub fn run_profile<N: DomNode>(profile: &VariantProfile, root: N) -> FieldRecord {
    let mut record = FieldRecord::new(
        profile.site,
        profile.fields,
        profile.faq_key,
        profile.substitutes_key,
    );
    let fragments = corpus::build_corpus(root, &profile.corpus);
    debug!("{}: corpus has {} fragments", profile.site, fragments.len());

    for stage in profile.stages {
        let written = match stage {
            Stage::Classify(rules) => classify::classify(&mut record, &fragments, rules),
            Stage::Headings(spec) => headings::extract_headings(&mut record, root, spec),
            Stage::Substitutes(spec) => {
                record.substitutes = substitutes::extract_substitutes(root, spec);
                record.substitutes.len()
            }
            Stage::FactBox(spec) => {
                usize::from(fact_box::extract_fact_box(&mut record, root, spec))
            }
            Stage::Faqs(spec) => {
                record.faqs = faq::extract_faqs(root, spec);
                record.faqs.len()
            }
            Stage::Safety(spec) => usize::from(safety::extract_safety(&mut record, root, spec)),
            Stage::Fallback(spec) => fallback::fill_leftovers(&mut record, &fragments, spec),
        };
        debug!("{}: stage {} wrote {}", profile.site, stage.name(), written);
    }

    record
}

/// Dispatch a parsed page to the pipeline for `site_id`.
pub fn extract_fields<N: DomNode>(site_id: &str, root: N) -> Result<FieldRecord, ExtractError> {
    let site = Site::from_str(site_id)?;
    info!("extracting {} page", site);
    Ok(run_profile(profile_for(site), root))
}

/// Parse raw markup and dispatch it to the pipeline for `site_id`.
pub fn extract_from_html(site_id: &str, html: &str) -> Result<FieldRecord, ExtractError> {
    let site = Site::from_str(site_id)?;
    if html.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    let document = HtmlDocument::parse(html);
    extract_fields(site.as_str(), document.root())
}

/// Full product-page extraction for a known site: name, images and the
/// site's field record. `url` is the page address images resolve against.
pub fn extract_page(site: Site, url: &str, html: &str) -> Result<ProductPage, ExtractError> {
    if html.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    let document = HtmlDocument::parse(html);
    let root = document.root();

    let medicine_name = root
        .find_all(&["h1"])
        .first()
        .map(|h1| h1.text())
        .filter(|name| !name.is_empty());
    let base = Url::parse(url).ok();
    let product_images = images::extract_images(root, base.as_ref(), medicine_name.as_deref());

    info!("extracting {} page {}", site, url);
    let details = run_profile(profile_for(site), root);
    info!(
        "{}: {} of {} fields, {} faqs, {} images",
        url,
        details.filled_count(),
        profile_for(site).fields.len(),
        details.faqs.len(),
        product_images.len()
    );

    Ok(ProductPage {
        url: url.to_string(),
        site,
        medicine_name,
        product_images,
        details,
        scraped_at: Utc::now().to_rfc3339(),
    })
}

/// Like [`extract_page`], with the site taken from the URL's host.
pub fn extract_product(url: &str, html: &str) -> Result<ProductPage, ExtractError> {
    let site =
        Site::from_url(url).ok_or_else(|| ExtractError::UnsupportedSite(url.to_string()))?;
    extract_page(site, url, html)
}
