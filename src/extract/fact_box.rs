use super::profile::FactBoxSpec;
use crate::core::types::FieldRecord;
use crate::dom::{char_len, DomNode};

/// Summarise the page's key facts into the fact-box field, if it is empty.
pub fn extract_fact_box<N: DomNode>(
    record: &mut FieldRecord,
    root: N,
    spec: &FactBoxSpec,
) -> bool {
    match spec {
        FactBoxSpec::LongestList { field, markers } => {
            let mut best: Option<(usize, String)> = None;
            for list in root.find_all(&["ul"]) {
                let text = list.joined_text(" | ");
                let lower = text.to_lowercase();
                if !markers.iter().any(|m| lower.contains(m)) {
                    continue;
                }
                let len = char_len(&text);
                if best.as_ref().map_or(true, |(best_len, _)| len > *best_len) {
                    best = Some((len, text));
                }
            }
            match best {
                Some((_, text)) => record.fill(field, text),
                None => false,
            }
        }
        FactBoxSpec::ClassHint {
            field,
            tags,
            class_hints,
            window,
            max_items,
        } => {
            let facts: Vec<String> = root
                .find_all(tags)
                .into_iter()
                .filter(|node| {
                    node.attr("class").is_some_and(|class| {
                        let class = class.to_lowercase();
                        class_hints.iter().any(|hint| class.contains(hint))
                    })
                })
                .map(|node| node.text())
                .filter(|text| window.contains(char_len(text)))
                .take(*max_items)
                .collect();
            if facts.is_empty() {
                return false;
            }
            record.fill(field, facts.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Site;
    use crate::dom::HtmlDocument;
    use crate::extract::profile::LengthWindow;

    fn record() -> FieldRecord {
        FieldRecord::new(Site::OneMg, &["fact_box"], "faqs", "all_substitutes")
    }

    #[test]
    fn longest_marked_list_wins() {
        let spec = FactBoxSpec::LongestList {
            field: "fact_box",
            markers: &["composition", "manufacturer"],
        };
        let doc = HtmlDocument::parse(
            "<ul><li>Home</li><li>Offers and deals for the whole family</li></ul>\
             <ul><li>Composition</li><li>Paracetamol</li></ul>\
             <ul><li>Manufacturer</li><li>Micro Labs Ltd</li><li>Habit forming: No</li></ul>",
        );
        let mut rec = record();
        assert!(extract_fact_box(&mut rec, doc.root(), &spec));
        assert_eq!(
            rec.get("fact_box"),
            Some("Manufacturer | Micro Labs Ltd | Habit forming: No")
        );
    }

    #[test]
    fn class_hinted_containers_are_joined() {
        let spec = FactBoxSpec::ClassHint {
            field: "fact_box",
            tags: &["div", "section"],
            class_hints: &["fact", "key", "info"],
            window: LengthWindow::between(20, 300),
            max_items: 3,
        };
        let doc = HtmlDocument::parse(
            "<div class='KeyFacts'>Prescription required: Yes</div>\
             <section class='product-info'>Tiny</section>\
             <div class='plain'>Storage: below 30 degrees</div>\
             <div class='info-1'>Therapeutic class: Analgesic</div>\
             <div class='info-2'>Chemical class: Anilide derivative</div>\
             <div class='info-3'>Action class: Non-opioid analgesic</div>",
        );
        let mut rec = record();
        extract_fact_box(&mut rec, doc.root(), &spec);
        assert_eq!(
            rec.get("fact_box"),
            Some(
                "Prescription required: Yes | Therapeutic class: Analgesic | \
                 Chemical class: Anilide derivative"
            )
        );
    }
}
