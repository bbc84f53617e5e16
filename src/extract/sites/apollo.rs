//! Apollo Pharmacy (`www.apollopharmacy.in/medicine/...`).

use crate::core::types::Site;
use crate::extract::profile::*;

pub const FIELDS: &[&str] = &[
    "about_medicine",
    "side_effects",
    "uses_and_benefits",
    "directions_for_use",
    "how_it_works",
    "storage",
    "overdose",
    "drug_warnings",
    "drug_interactions",
    "diet_and_lifestyle",
    "therapeutic",
    "safety_advice",
];

const RULES: &[KeywordRule] = &[
    KeywordRule::once(
        "about_medicine",
        &["belongs to", "class of", "antihistamine", "medication used", "drug that"],
    ),
    KeywordRule::once(
        "side_effects",
        &["side effect", "adverse effect", "may cause", "common side"],
    ),
    KeywordRule::once(
        "uses_and_benefits",
        &["used to treat", "treatment of", "prescribed for", "indication", "treats"],
    ),
    KeywordRule::once(
        "directions_for_use",
        &["directions for use", "how to take", "dosage", "administration"],
    ),
    KeywordRule::once(
        "how_it_works",
        &["how it works", "works by", "mechanism of action", "action"],
    ),
    KeywordRule::once(
        "drug_warnings",
        &["should not be taken", "contraindicated", "warning", "caution"],
    ),
    KeywordRule::once(
        "storage",
        &["store in", "storage", "keep out", "temperature"],
    ),
    KeywordRule::once(
        "drug_interactions",
        &["drug interaction", "avoid taking", "concurrent use"],
    ),
    KeywordRule::once(
        "diet_and_lifestyle",
        &["diet", "lifestyle", "food", "alcohol", "exercise"],
    ),
    KeywordRule::once("overdose", &["overdose", "too much", "excess dose"]),
    KeywordRule::guarded(
        "therapeutic",
        &["therapeutic", "pharmacological", "category"],
        Guard::ShorterThan(300),
    ),
];

const SAFETY: SafetySpec = SafetySpec {
    field: "safety_advice",
    triggers: &["alcohol", "pregnancy", "breastfeeding", "driving"],
    warning_keys: &[
        ("alcoholWarning", "Alcohol"),
        ("pregnancyWarning", "Pregnancy"),
        ("breastfeedingWarning", "Breastfeeding"),
        ("drivingWarning", "Driving"),
    ],
    plain_window: LengthWindow::between(20, 300),
    max_entries: 4,
};

const FAQS: FaqSpec = FaqSpec {
    source: QuestionSource::TextNodes,
    min_question_len: 10,
    answer_window: LengthWindow::between(20, 500),
    cap: 8,
};

const SUBSTITUTES: SubstituteSpec = SubstituteSpec {
    filter: LinkFilter::TextKeywords(&["tablet", "capsule", "mg", "ml"]),
    max_len: 100,
    blocklist: &["search", "category", "home", "cart", "login"],
    cap: 15,
};

const FALLBACK: FallbackSpec = FallbackSpec {
    window: LengthWindow::between(80, 400),
    affinity: &[],
    positional: true,
};

pub static PROFILE: VariantProfile = VariantProfile {
    site: Site::Apollo,
    fields: FIELDS,
    faq_key: "faqs",
    substitutes_key: "product_substitutes",
    corpus: CorpusSpec {
        passes: &[
            // Apollo's main content containers.
            CorpusPass {
                tags: &["div"],
                class: Some("wj"),
                window: LengthWindow::above(30),
            },
            CorpusPass {
                tags: &["div", "section", "p", "span"],
                class: None,
                window: LengthWindow::between(50, 1000),
            },
        ],
        blocklist: &[],
    },
    stages: &[
        Stage::Classify(RULES),
        Stage::Safety(&SAFETY),
        Stage::Faqs(&FAQS),
        Stage::Substitutes(&SUBSTITUTES),
        Stage::Fallback(&FALLBACK),
    ],
};
