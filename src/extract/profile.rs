//! Static description of one site's extraction pipeline.
//!
//! Every site runs the same generic stages; what differs is the data in its
//! [`VariantProfile`]: the field list, which stages run and in what order,
//! and the keyword tables those stages consult.

use crate::core::types::Site;

#[derive(Debug)]
pub struct VariantProfile {
    pub site: Site,
    /// Scalar fields in output order.
    pub fields: &'static [&'static str],
    pub faq_key: &'static str,
    pub substitutes_key: &'static str,
    pub corpus: CorpusSpec,
    /// Stages in execution order. Earlier stages win write-once fields.
    pub stages: &'static [Stage],
}

#[derive(Debug)]
pub enum Stage {
    Classify(&'static [KeywordRule]),
    Headings(&'static HeadingSpec),
    Substitutes(&'static SubstituteSpec),
    FactBox(&'static FactBoxSpec),
    Faqs(&'static FaqSpec),
    Safety(&'static SafetySpec),
    Fallback(&'static FallbackSpec),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Classify(_) => "classify",
            Stage::Headings(_) => "headings",
            Stage::Substitutes(_) => "substitutes",
            Stage::FactBox(_) => "fact_box",
            Stage::Faqs(_) => "faqs",
            Stage::Safety(_) => "safety",
            Stage::Fallback(_) => "fallback",
        }
    }
}

/// Strict length window: `min < len < max`, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min: usize,
    pub max: Option<usize>,
}

impl LengthWindow {
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn above(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, len: usize) -> bool {
        len > self.min && self.max.map_or(true, |max| len < max)
    }
}

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CorpusPass {
    pub tags: &'static [&'static str],
    /// Only elements carrying this class token.
    pub class: Option<&'static str>,
    pub window: LengthWindow,
}

#[derive(Debug)]
pub struct CorpusSpec {
    pub passes: &'static [CorpusPass],
    /// Fragments containing any of these (lower-cased) are dropped.
    pub blocklist: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Keyword classifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    None,
    LongerThan(usize),
    ShorterThan(usize),
    /// Rejects fragments containing any of these phrases.
    Lacks(&'static [&'static str]),
}

impl Guard {
    /// `text` must already be lower-cased.
    pub fn accepts(&self, text: &str, len: usize) -> bool {
        match *self {
            Guard::None => true,
            Guard::LongerThan(n) => len > n,
            Guard::ShorterThan(n) => len < n,
            Guard::Lacks(phrases) => !phrases.iter().any(|p| text.contains(p)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    Once,
    ReplaceIfLonger,
}

#[derive(Debug)]
pub struct KeywordRule {
    pub field: &'static str,
    pub keywords: &'static [&'static str],
    pub guard: Guard,
    pub policy: WritePolicy,
}

impl KeywordRule {
    pub const fn once(field: &'static str, keywords: &'static [&'static str]) -> Self {
        Self {
            field,
            keywords,
            guard: Guard::None,
            policy: WritePolicy::Once,
        }
    }

    pub const fn guarded(
        field: &'static str,
        keywords: &'static [&'static str],
        guard: Guard,
    ) -> Self {
        Self {
            field,
            keywords,
            guard,
            policy: WritePolicy::Once,
        }
    }

    pub const fn replace_if_longer(
        field: &'static str,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            field,
            keywords,
            guard: Guard::None,
            policy: WritePolicy::ReplaceIfLonger,
        }
    }

    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

// ---------------------------------------------------------------------------
// Headings
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct HeadingRule {
    pub field: &'static str,
    /// Any-of list of all-of substring sets.
    pub patterns: &'static [&'static [&'static str]],
}

impl HeadingRule {
    /// `heading` must already be lower-cased.
    pub fn matches(&self, heading: &str) -> bool {
        self.patterns
            .iter()
            .any(|all| all.iter().all(|part| heading.contains(part)))
    }
}

#[derive(Debug)]
pub struct ContainerFallback {
    pub min_len: usize,
    pub max_chars: usize,
}

#[derive(Debug)]
pub struct HeadingSpec {
    pub rules: &'static [HeadingRule],
    pub block_tags: &'static [&'static str],
    /// Keep walking past non-block siblings instead of stopping at the first one.
    pub skip_foreign_blocks: bool,
    pub min_len: usize,
    pub blocklist: &'static [&'static str],
    pub container_fallback: Option<ContainerFallback>,
}

// ---------------------------------------------------------------------------
// Structured fragments
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum QuestionSource {
    /// Every non-blank text node; the answer follows the node's parent.
    TextNodes,
    /// Headings with these tags; the answer follows the heading.
    Headings(&'static [&'static str]),
}

#[derive(Debug)]
pub struct FaqSpec {
    pub source: QuestionSource,
    pub min_question_len: usize,
    pub answer_window: LengthWindow,
    pub cap: usize,
}

#[derive(Debug)]
pub enum LinkFilter {
    HrefContains(&'static str),
    TextKeywords(&'static [&'static str]),
}

#[derive(Debug)]
pub struct SubstituteSpec {
    pub filter: LinkFilter,
    pub max_len: usize,
    pub blocklist: &'static [&'static str],
    pub cap: usize,
}

#[derive(Debug)]
pub struct SafetySpec {
    pub field: &'static str,
    pub triggers: &'static [&'static str],
    /// Structured-data key and the label its value is reported under.
    pub warning_keys: &'static [(&'static str, &'static str)],
    pub plain_window: LengthWindow,
    pub max_entries: usize,
}

#[derive(Debug)]
pub enum FactBoxSpec {
    /// Longest list whose joined text mentions one of the markers.
    LongestList {
        field: &'static str,
        markers: &'static [&'static str],
    },
    /// Containers whose class mentions one of the hints, short texts joined.
    ClassHint {
        field: &'static str,
        tags: &'static [&'static str],
        class_hints: &'static [&'static str],
        window: LengthWindow,
        max_items: usize,
    },
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct FallbackSpec {
    pub window: LengthWindow,
    pub affinity: &'static [(&'static str, &'static [&'static str])],
    pub positional: bool,
}
