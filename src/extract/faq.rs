use super::profile::{FaqSpec, QuestionSource};
use crate::core::types::FaqEntry;
use crate::dom::{char_len, collapse_whitespace, DomNode};

/// Pair question-like text with the text of the element that follows it.
pub fn extract_faqs<N: DomNode>(root: N, spec: &FaqSpec) -> Vec<FaqEntry> {
    let candidates: Vec<(String, Option<N>)> = match spec.source {
        QuestionSource::TextNodes => root
            .text_nodes()
            .into_iter()
            .map(|node| {
                let question = collapse_whitespace(node.raw_text().unwrap_or_default());
                let answer = node.parent().and_then(|p| p.next_element_sibling());
                (question, answer)
            })
            .collect(),
        QuestionSource::Headings(tags) => root
            .find_all(tags)
            .into_iter()
            .map(|heading| (heading.text(), heading.next_element_sibling()))
            .collect(),
    };

    let mut faqs = Vec::new();
    for (question, answer_node) in candidates {
        if faqs.len() >= spec.cap {
            break;
        }
        if !question.ends_with('?') || char_len(&question) <= spec.min_question_len {
            continue;
        }
        let Some(answer_node) = answer_node else {
            continue;
        };
        let answer = answer_node.text();
        if !spec.answer_window.contains(char_len(&answer)) {
            continue;
        }
        faqs.push(FaqEntry { question, answer });
    }
    faqs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlDocument;
    use crate::extract::profile::LengthWindow;

    const TEXT_NODES: FaqSpec = FaqSpec {
        source: QuestionSource::TextNodes,
        min_question_len: 10,
        answer_window: LengthWindow::between(20, 500),
        cap: 2,
    };

    const HEADINGS: FaqSpec = FaqSpec {
        source: QuestionSource::Headings(&["h3", "h4"]),
        min_question_len: 10,
        answer_window: LengthWindow::above(20),
        cap: 5,
    };

    #[test]
    fn answer_follows_the_question_parent() {
        let doc = HtmlDocument::parse(
            "<div><span>  Is Dolo 650 safe?  </span>\
             <p>Yes, when taken as prescribed by your doctor.</p></div>",
        );
        let faqs = extract_faqs(doc.root(), &TEXT_NODES);
        assert_eq!(
            faqs,
            vec![FaqEntry {
                question: "Is Dolo 650 safe?".to_string(),
                answer: "Yes, when taken as prescribed by your doctor.".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_short_questions_and_unanswered_ones() {
        let doc = HtmlDocument::parse(
            "<p>Why?</p><p>Because the answer is long enough to count.</p>\
             <p>What is the daily dose?</p><p>Two.</p>\
             <p>Does it mention a question? Not at the end.</p><p>Unused answer text that is long.</p>",
        );
        assert!(extract_faqs(doc.root(), &TEXT_NODES).is_empty());
    }

    #[test]
    fn cap_limits_output() {
        let mut html = String::new();
        for i in 0..10 {
            html.push_str(&format!(
                "<h3>Question number {i} about this medicine?</h3><p>Answer number {i} with enough text.</p>"
            ));
        }
        let doc = HtmlDocument::parse(&html);
        assert_eq!(extract_faqs(doc.root(), &TEXT_NODES).len(), 2);
        let faqs = extract_faqs(doc.root(), &HEADINGS);
        assert_eq!(faqs.len(), 5);
        assert_eq!(faqs[4].answer, "Answer number 4 with enough text.");
    }
}
