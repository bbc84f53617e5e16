use super::corpus::Fragment;
use super::profile::{KeywordRule, WritePolicy};
use crate::core::types::FieldRecord;

/// Whether `rule` could still write `fragment` into its field.
fn writable<N>(record: &FieldRecord, rule: &KeywordRule, fragment: &Fragment<N>) -> bool {
    match rule.policy {
        WritePolicy::Once => record.has_field(rule.field) && !record.is_filled(rule.field),
        WritePolicy::ReplaceIfLonger => match record.get(rule.field) {
            Some(current) => fragment.len > current.chars().count(),
            None => record.has_field(rule.field),
        },
    }
}

/// Run an ordered rule table over the corpus, first applicable rule wins.
///
/// A rule applies when one of its keywords occurs in the fragment and its
/// field can take the value. The applying rule claims the fragment even when
/// its guard then rejects it. Returns the number of fields written.
pub fn classify<N>(
    record: &mut FieldRecord,
    fragments: &[Fragment<N>],
    rules: &[KeywordRule],
) -> usize {
    let mut written = 0;

    for fragment in fragments {
        let Some(rule) = rules
            .iter()
            .find(|rule| rule.matches(&fragment.lower) && writable(record, rule, fragment))
        else {
            continue;
        };

        if !rule.guard.accepts(&fragment.lower, fragment.len) {
            continue;
        }

        let stored = match rule.policy {
            WritePolicy::Once => record.fill(rule.field, fragment.text.as_str()),
            WritePolicy::ReplaceIfLonger => {
                record.replace_if_longer(rule.field, fragment.text.as_str())
            }
        };
        if stored {
            written += 1;
        }
    }

    written
}
