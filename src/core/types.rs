use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::ExtractError;

/// Pharmacy site layouts with a dedicated extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    #[serde(rename = "1mg")]
    OneMg,
    Apollo,
    Truemeds,
}

impl Site {
    pub const ALL: [Site; 3] = [Site::OneMg, Site::Apollo, Site::Truemeds];

    /// Resolve a site identifier (`1mg`, `apollo`, `truemeds` and their domain forms).
    pub fn parse_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1mg" | "tata1mg" | "tata-1mg" | "1mg.com" | "www.1mg.com" => Some(Site::OneMg),
            "apollo" | "apollopharmacy" | "apollopharmacy.in" | "www.apollopharmacy.in" => {
                Some(Site::Apollo)
            }
            "truemeds" | "truemeds.in" | "www.truemeds.in" => Some(Site::Truemeds),
            _ => None,
        }
    }

    /// Detect the site from a product page URL's host.
    pub fn from_url(url: &str) -> Option<Self> {
        let parsed = url::Url::parse(url.trim()).ok()?;
        let host = parsed.host_str()?.to_ascii_lowercase();
        Site::ALL
            .into_iter()
            .find(|site| host == site.domain() || host.ends_with(&format!(".{}", site.domain())))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Site::OneMg => "1mg",
            Site::Apollo => "apollo",
            Site::Truemeds => "truemeds",
        }
    }

    pub fn domain(&self) -> &'static str {
        match self {
            Site::OneMg => "1mg.com",
            Site::Apollo => "apollopharmacy.in",
            Site::Truemeds => "truemeds.in",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Site::parse_str(s).ok_or_else(|| ExtractError::UnsupportedSite(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

/// Per-page extraction result: the variant's scalar fields in a fixed order,
/// plus the FAQ and substitute lists.
///
/// Scalar fields are write-once through [`FieldRecord::fill`]; only
/// [`FieldRecord::replace_if_longer`] may change a filled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    site: Site,
    fields: Vec<(&'static str, Option<String>)>,
    faq_key: &'static str,
    substitutes_key: &'static str,
    pub faqs: Vec<FaqEntry>,
    pub substitutes: Vec<String>,
}

impl FieldRecord {
    pub fn new(
        site: Site,
        field_names: &[&'static str],
        faq_key: &'static str,
        substitutes_key: &'static str,
    ) -> Self {
        Self {
            site,
            fields: field_names.iter().map(|name| (*name, None)).collect(),
            faq_key,
            substitutes_key,
            faqs: Vec::new(),
            substitutes: Vec::new(),
        }
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == field)
    }

    pub fn is_filled(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Set `field` if it is still empty. Returns whether the value was written.
    pub fn fill(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(field) {
            Some(slot) if slot.is_none() => {
                *slot = Some(value.into());
                true
            }
            _ => false,
        }
    }

    /// Set `field` if it is empty or `value` is strictly longer than the current value.
    pub fn replace_if_longer(&mut self, field: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.slot_mut(field) {
            Some(slot) => {
                let longer = slot
                    .as_ref()
                    .map_or(true, |current| value.chars().count() > current.chars().count());
                if longer {
                    *slot = Some(value);
                }
                longer
            }
            None => false,
        }
    }

    /// Whether any scalar field already holds exactly `text`.
    pub fn holds_value(&self, text: &str) -> bool {
        self.fields
            .iter()
            .any(|(_, value)| value.as_deref() == Some(text))
    }

    pub fn unfilled(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.fields
            .iter()
            .map(|(name, value)| (*name, value.as_deref()))
    }

    pub fn filled_count(&self) -> usize {
        self.fields.iter().filter(|(_, value)| value.is_some()).count()
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut Option<String>> {
        self.fields
            .iter_mut()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(self.faq_key, &self.faqs)?;
        map.serialize_entry(self.substitutes_key, &self.substitutes)?;
        map.end()
    }
}

/// Everything extracted from one product page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub url: String,
    pub site: Site,
    pub medicine_name: Option<String>,
    pub product_images: Vec<String>,
    pub details: FieldRecord,
    pub scraped_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FieldRecord {
        FieldRecord::new(Site::Apollo, &["uses", "storage"], "faqs", "product_substitutes")
    }

    #[test]
    fn fill_is_write_once() {
        let mut rec = record();
        assert!(rec.fill("uses", "first"));
        assert!(!rec.fill("uses", "second"));
        assert_eq!(rec.get("uses"), Some("first"));
        assert!(!rec.fill("unknown_field", "x"));
    }

    #[test]
    fn replace_if_longer_needs_strictly_longer_text() {
        let mut rec = record();
        assert!(rec.replace_if_longer("uses", "abcd"));
        assert!(!rec.replace_if_longer("uses", "wxyz"));
        assert!(rec.replace_if_longer("uses", "abcde"));
        assert_eq!(rec.get("uses"), Some("abcde"));
    }

    #[test]
    fn serializes_flat_in_field_order() {
        let mut rec = record();
        rec.fill("storage", "Store below 30°C");
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"uses":null,"storage":"Store below 30°C","faqs":[],"product_substitutes":[]}"#
        );
    }

    #[test]
    fn site_identifiers_and_hosts() {
        assert_eq!(Site::parse_str("1MG"), Some(Site::OneMg));
        assert_eq!("apollo".parse::<Site>().unwrap(), Site::Apollo);
        assert_eq!(
            "unknown-pharmacy".parse::<Site>(),
            Err(ExtractError::UnsupportedSite("unknown-pharmacy".to_string()))
        );
        assert_eq!(
            Site::from_url("https://www.truemeds.in/medicine/dolo-650-tablet"),
            Some(Site::Truemeds)
        );
        assert_eq!(Site::from_url("https://www.not1mg.com/drugs/x"), None);
        assert_eq!(Site::from_url("not a url"), None);
    }
}
