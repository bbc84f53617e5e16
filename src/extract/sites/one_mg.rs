//! Tata 1mg (`www.1mg.com/drugs/...`).

use crate::core::types::Site;
use crate::extract::profile::*;

pub const FIELDS: &[&str] = &[
    "overview",
    "uses_and_benefits",
    "side_effects",
    "how_to_use",
    "how_drug_works",
    "safety_advice",
    "missed_dose",
    "quick_tips",
    "fact_box",
    "interaction_with_drugs",
    "patient_concerns",
    "user_feedback",
];

const PRIMARY_RULES: &[KeywordRule] = &[
    KeywordRule::replace_if_longer(
        "uses_and_benefits",
        &["treatment of", "used for", "indication"],
    ),
    KeywordRule::replace_if_longer(
        "side_effects",
        &["side effects", "adverse effects", "most side effects"],
    ),
    KeywordRule::once(
        "how_to_use",
        &["take this medicine", "dose and duration", "how to take"],
    ),
    KeywordRule::guarded(
        "how_drug_works",
        &["works by", "mechanism", "blocks", "antihistamine"],
        Guard::Lacks(&["take this medicine"]),
    ),
    KeywordRule::guarded(
        "safety_advice",
        &["alcohol", "pregnancy", "breastfeeding", "driving", "unsafe", "caution"],
        Guard::LongerThan(100),
    ),
    KeywordRule::guarded(
        "overview",
        &["belongs to", "class of", "antihistamine", "description"],
        Guard::LongerThan(100),
    ),
    KeywordRule::once("quick_tips", &["quick tip", "tip", "remember", "important"]),
    KeywordRule::once("missed_dose", &["missed dose", "forget to take", "skip"]),
];

/// Runs last, over the same corpus, after every other stage.
const INTERACTION_RULES: &[KeywordRule] = &[KeywordRule::guarded(
    "interaction_with_drugs",
    &["interaction", "drug interaction", "contraindication"],
    Guard::LongerThan(50),
)];

const SUBSTITUTES: SubstituteSpec = SubstituteSpec {
    filter: LinkFilter::HrefContains("/drugs/"),
    max_len: 100,
    blocklist: &[],
    cap: 10,
};

const FACT_BOX: FactBoxSpec = FactBoxSpec::LongestList {
    field: "fact_box",
    markers: &["composition", "manufacturer", "therapeutic", "habit forming"],
};

const FAQS: FaqSpec = FaqSpec {
    source: QuestionSource::Headings(&["h3", "h4"]),
    min_question_len: 10,
    answer_window: LengthWindow::above(20),
    cap: 5,
};

const HEADINGS: HeadingSpec = HeadingSpec {
    rules: &[
        HeadingRule {
            field: "patient_concerns",
            patterns: &[&["patient concerns"]],
        },
        HeadingRule {
            field: "user_feedback",
            patterns: &[&["user feedback"]],
        },
        HeadingRule {
            field: "overview",
            patterns: &[&["product introduction"]],
        },
    ],
    block_tags: &["div", "p", "section"],
    skip_foreign_blocks: false,
    min_len: 30,
    blocklist: &[],
    container_fallback: None,
};

pub static PROFILE: VariantProfile = VariantProfile {
    site: Site::OneMg,
    fields: FIELDS,
    faq_key: "faqs",
    substitutes_key: "all_substitutes",
    corpus: CorpusSpec {
        passes: &[CorpusPass {
            tags: &["div"],
            class: None,
            window: LengthWindow::between(50, 2000),
        }],
        blocklist: &[],
    },
    stages: &[
        Stage::Classify(PRIMARY_RULES),
        Stage::Substitutes(&SUBSTITUTES),
        Stage::FactBox(&FACT_BOX),
        Stage::Faqs(&FAQS),
        Stage::Headings(&HEADINGS),
        Stage::Classify(INTERACTION_RULES),
    ],
};
