use std::sync::OnceLock;

use aho_corasick::AhoCorasick;
use url::Url;

use crate::dom::DomNode;

const SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy"];

/// URL fragments that mark an image as a product shot.
const PRODUCT_URL_HINTS: &[&str] = &["product", "medicine", "tablet", "capsule", "drug"];

/// Alt-text words that mark an image as a product shot.
const PRODUCT_ALT_HINTS: &[&str] = &["tablet", "capsule", "medicine", "drug"];

/// Site chrome and payment badges.
const CHROME_PATTERNS: &[&str] = &[
    "logo",
    "icon",
    "banner",
    "nav",
    "header",
    "footer",
    "visa",
    "mastercard",
    "amex",
];

static CHROME_MATCHER: OnceLock<AhoCorasick> = OnceLock::new();

fn chrome_matcher() -> &'static AhoCorasick {
    CHROME_MATCHER.get_or_init(|| {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(CHROME_PATTERNS)
            .expect("valid image chrome patterns")
    })
}

/// Product image URLs on the page, resolved against `base` and deduplicated
/// in document order. Without a base, sources are kept as written.
pub fn extract_images<N: DomNode>(
    root: N,
    base: Option<&Url>,
    medicine_name: Option<&str>,
) -> Vec<String> {
    // First word of the product name, e.g. "dolo" for "Dolo 650 Tablet".
    let name_hint = medicine_name
        .and_then(|name| name.split_whitespace().next())
        .map(str::to_lowercase);

    let mut images: Vec<String> = Vec::new();
    for img in root.find_all(&["img"]) {
        let Some(src) = SOURCE_ATTRS
            .iter()
            .find_map(|attr| img.attr(attr).map(str::trim).filter(|s| !s.is_empty()))
        else {
            continue;
        };
        if src.starts_with("data:image") {
            continue;
        }

        let src_lower = src.to_lowercase();
        let alt = img.attr("alt").unwrap_or_default().to_lowercase();
        let product_like = PRODUCT_URL_HINTS.iter().any(|k| src_lower.contains(k))
            || PRODUCT_ALT_HINTS.iter().any(|k| alt.contains(k))
            || name_hint.as_deref().is_some_and(|hint| alt.contains(hint));
        if !product_like || chrome_matcher().is_match(src) {
            continue;
        }

        let resolved = match base {
            Some(base) => match base.join(src) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    tracing::debug!("unresolvable image source {}: {}", src, e);
                    continue;
                }
            },
            None => src.to_string(),
        };
        if !images.contains(&resolved) {
            images.push(resolved);
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;

    #[test]
    fn keeps_product_images_and_drops_chrome() {
        let doc = HtmlDocument::parse(
            r#"<img src="/images/site-LOGO.png" alt="tablet logo">
               <img src="/img/product/dolo-650.jpg" alt="">
               <img data-src="https://cdn.example.com/x/123.jpg" alt="Dolo 650 pack">
               <img src="data:image/png;base64,AAAA" alt="tablet">
               <img src="/img/product/dolo-650.jpg">
               <img src="/static/visa-card.png" alt="medicine payment">
               <img src="/misc/photo.jpg" alt="happy customer">"#,
        );
        let base = Url::parse("https://www.1mg.com/drugs/dolo-650-tablet-74467").unwrap();
        let images = extract_images(doc.root(), Some(&base), Some("Dolo 650 Tablet"));
        assert_eq!(
            images,
            vec![
                "https://www.1mg.com/img/product/dolo-650.jpg",
                "https://cdn.example.com/x/123.jpg",
            ]
        );
    }

    #[test]
    fn relative_sources_resolve_against_the_page() {
        let doc = HtmlDocument::parse(r#"<img data-lazy="media/tablet.png">"#);
        let base = Url::parse("https://www.truemeds.in/medicine/dolo-650/").unwrap();
        assert_eq!(
            extract_images(doc.root(), Some(&base), None),
            vec!["https://www.truemeds.in/medicine/dolo-650/media/tablet.png"]
        );
        assert_eq!(
            extract_images(doc.root(), None, None),
            vec!["media/tablet.png"]
        );
    }
}
