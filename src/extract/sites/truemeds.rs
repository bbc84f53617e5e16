//! Truemeds (`www.truemeds.in/medicine/...`).

use crate::core::types::Site;
use crate::extract::profile::*;

pub const FIELDS: &[&str] = &[
    "uses",
    "directions_for_use",
    "route_of_administration",
    "side_effects",
    "medicine_activity",
    "precautions_and_warnings",
    "interactions",
    "dosage_information",
    "storage",
    "diet_and_lifestyle_guidance",
    "fact_box",
];

/// Navigation and account chrome that never counts as content.
const NAV_TERMS: &[&str] = &["login", "sign up", "cart", "wishlist", "search", "menu"];

// "route ... administration" is listed after plain "administration", so it
// only ever matches through the classifier, never through a heading.
const HEADINGS: HeadingSpec = HeadingSpec {
    rules: &[
        HeadingRule {
            field: "uses",
            patterns: &[&["about"], &["introduction"]],
        },
        HeadingRule {
            field: "uses",
            patterns: &[&["uses"], &["indication"]],
        },
        HeadingRule {
            field: "directions_for_use",
            patterns: &[&["directions"], &["how to use"], &["administration"]],
        },
        HeadingRule {
            field: "route_of_administration",
            patterns: &[&["route", "administration"]],
        },
        HeadingRule {
            field: "side_effects",
            patterns: &[&["side effects"], &["adverse effects"]],
        },
        HeadingRule {
            field: "medicine_activity",
            patterns: &[&["how", "works"], &["mechanism"]],
        },
        HeadingRule {
            field: "precautions_and_warnings",
            patterns: &[&["safety"], &["warnings"], &["precautions"]],
        },
        HeadingRule {
            field: "interactions",
            patterns: &[&["interactions"], &["contraindications"]],
        },
        HeadingRule {
            field: "storage",
            patterns: &[&["storage"], &["store"]],
        },
        HeadingRule {
            field: "dosage_information",
            patterns: &[&["dosage"], &["dose"]],
        },
    ],
    block_tags: &["p", "div", "section", "ul", "ol"],
    skip_foreign_blocks: true,
    min_len: 30,
    blocklist: &["login", "sign up", "cart", "wishlist"],
    container_fallback: Some(ContainerFallback {
        min_len: 50,
        max_chars: 600,
    }),
};

const RULES: &[KeywordRule] = &[
    KeywordRule::once(
        "uses",
        &[
            "used for",
            "treats",
            "prescribed for",
            "allergy",
            "allergic",
            "histamine",
            "antihistamine",
            "indication",
        ],
    ),
    KeywordRule::once(
        "side_effects",
        &[
            "side effect",
            "adverse effect",
            "drowsiness",
            "nausea",
            "headache",
            "dry mouth",
            "may cause",
        ],
    ),
    KeywordRule::once(
        "directions_for_use",
        &[
            "take with",
            "swallow",
            "dosage",
            "once daily",
            "how to take",
            "administration",
        ],
    ),
    KeywordRule::once(
        "medicine_activity",
        &["blocks", "prevents", "inhibits", "mechanism", "works by", "action"],
    ),
    KeywordRule::once(
        "precautions_and_warnings",
        &["precaution", "warning", "caution", "avoid", "should not"],
    ),
    KeywordRule::once(
        "interactions",
        &["interaction", "concurrent", "combination", "avoid taking with"],
    ),
    KeywordRule::once(
        "storage",
        &["store", "storage", "temperature", "keep out", "room temperature"],
    ),
    KeywordRule::once(
        "route_of_administration",
        &["oral", "by mouth", "route of administration", "take orally"],
    ),
    KeywordRule::once(
        "diet_and_lifestyle_guidance",
        &["diet", "lifestyle", "food", "alcohol", "exercise", "driving"],
    ),
];

const FACT_BOX: FactBoxSpec = FactBoxSpec::ClassHint {
    field: "fact_box",
    tags: &["div", "section"],
    class_hints: &["fact", "key", "info"],
    window: LengthWindow::between(20, 300),
    max_items: 3,
};

const FAQS: FaqSpec = FaqSpec {
    source: QuestionSource::TextNodes,
    min_question_len: 10,
    answer_window: LengthWindow::between(15, 400),
    cap: 6,
};

const FALLBACK: FallbackSpec = FallbackSpec {
    window: LengthWindow::between(60, 400),
    affinity: &[
        (
            "dosage_information",
            &["mg", "dose", "tablet", "capsule", "daily"],
        ),
        ("uses", &["treatment", "condition", "disease", "symptom"]),
        (
            "medicine_activity",
            &["receptor", "protein", "enzyme", "pathway"],
        ),
        (
            "precautions_and_warnings",
            &["pregnancy", "liver", "kidney", "elderly"],
        ),
    ],
    positional: true,
};

pub static PROFILE: VariantProfile = VariantProfile {
    site: Site::Truemeds,
    fields: FIELDS,
    faq_key: "faqs",
    substitutes_key: "substitutes",
    corpus: CorpusSpec {
        passes: &[CorpusPass {
            tags: &["p", "div", "section", "span", "li"],
            class: None,
            window: LengthWindow::between(40, 800),
        }],
        blocklist: NAV_TERMS,
    },
    stages: &[
        Stage::Headings(&HEADINGS),
        Stage::Classify(RULES),
        Stage::FactBox(&FACT_BOX),
        Stage::Faqs(&FAQS),
        Stage::Fallback(&FALLBACK),
    ],
};
