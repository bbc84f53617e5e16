use super::corpus::Fragment;
use super::profile::FallbackSpec;
use crate::core::types::FieldRecord;

/// Hand leftover corpus text to fields nothing else filled.
///
/// Fields with an affinity entry take the first unused fragment mentioning
/// one of their keywords; when positional filling is on, the remaining
/// fields without an entry take unused fragments in corpus order.
pub fn fill_leftovers<N>(
    record: &mut FieldRecord,
    fragments: &[Fragment<N>],
    spec: &FallbackSpec,
) -> usize {
    let mut pool: Vec<&Fragment<N>> = fragments
        .iter()
        .filter(|f| spec.window.contains(f.len) && !record.holds_value(&f.text))
        .collect();
    let mut written = 0;

    for field in record.unfilled() {
        let Some((_, keywords)) = spec.affinity.iter().find(|(name, _)| *name == field) else {
            continue;
        };
        let Some(pos) = pool
            .iter()
            .position(|f| keywords.iter().any(|k| f.lower.contains(k)))
        else {
            continue;
        };
        let fragment = pool.remove(pos);
        if record.fill(field, fragment.text.as_str()) {
            written += 1;
        }
    }

    if spec.positional {
        let mut remaining = pool.into_iter();
        for field in record.unfilled() {
            if spec.affinity.iter().any(|(name, _)| *name == field) {
                continue;
            }
            let Some(fragment) = remaining.next() else {
                break;
            };
            if record.fill(field, fragment.text.as_str()) {
                written += 1;
            }
        }
    }

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Site;
    use crate::extract::profile::LengthWindow;

    fn fragment(text: &str) -> Fragment<()> {
        Fragment {
            text: text.to_string(),
            lower: text.to_lowercase(),
            len: text.chars().count(),
            node: (),
        }
    }

    const SPEC: FallbackSpec = FallbackSpec {
        window: LengthWindow::between(10, 100),
        affinity: &[("dosage", &["mg", "dose"])],
        positional: true,
    };

    #[test]
    fn affinity_first_then_positional() {
        let mut rec =
            FieldRecord::new(Site::Truemeds, &["uses", "dosage", "storage"], "faqs", "subs");
        let frags = [
            fragment("General leaflet paragraph one"),
            fragment("Take one 650 mg tablet"),
            fragment("General leaflet paragraph two"),
        ];
        assert_eq!(fill_leftovers(&mut rec, &frags, &SPEC), 3);
        assert_eq!(rec.get("dosage"), Some("Take one 650 mg tablet"));
        assert_eq!(rec.get("uses"), Some("General leaflet paragraph one"));
        assert_eq!(rec.get("storage"), Some("General leaflet paragraph two"));
    }

    #[test]
    fn never_reuses_a_stored_value_or_leaves_the_window() {
        let mut rec = FieldRecord::new(Site::Apollo, &["uses", "storage"], "faqs", "subs");
        rec.fill("uses", "General leaflet paragraph one");
        let frags = [
            fragment("General leaflet paragraph one"),
            fragment("too short"),
        ];
        assert_eq!(fill_leftovers(&mut rec, &frags, &SPEC), 0);
        assert_eq!(rec.get("storage"), None);
    }

    #[test]
    fn affinity_fields_are_not_filled_positionally() {
        let mut rec = FieldRecord::new(Site::Truemeds, &["dosage", "uses"], "faqs", "subs");
        let frags = [fragment("General leaflet paragraph one")];
        fill_leftovers(&mut rec, &frags, &SPEC);
        assert_eq!(rec.get("dosage"), None);
        assert_eq!(rec.get("uses"), Some("General leaflet paragraph one"));
    }
}
