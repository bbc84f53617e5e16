use thiserror::Error;

/// The only failures that cross the extraction boundary. Every per-fragment
/// miss degrades to an absent field instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("scraper not implemented for site: {0}")]
    UnsupportedSite(String),

    #[error("empty document: nothing to classify")]
    EmptyInput,
}

impl ExtractError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedSite(_) => "UNSUPPORTED_SITE",
            ExtractError::EmptyInput => "EMPTY_INPUT",
        }
    }
}
