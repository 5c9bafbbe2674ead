//! FAQ fallback matching
//!
//! Used only when no keyword rule matched. An FAQ matches when its
//! lowercased question contains the input, or the input contains the
//! question's first three words.

use gplus_core::FaqItem;

/// Words taken from the start of a question for the reverse match
pub const QUESTION_PREFIX_WORDS: usize = 3;

/// First FAQ, in table order, related to the normalized input
///
/// Empty input matches nothing; otherwise every question would contain it.
pub fn find_related_faq<'a>(faqs: &'a [FaqItem], normalized: &str) -> Option<&'a FaqItem> {
    if normalized.is_empty() {
        return None;
    }

    faqs.iter().find(|faq| {
        let question = faq.question.to_lowercase();
        if question.contains(normalized) {
            return true;
        }
        let prefix = question_prefix(&question);
        !prefix.is_empty() && normalized.contains(&prefix)
    })
}

fn question_prefix(question: &str) -> String {
    question
        .split(' ')
        .take(QUESTION_PREFIX_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
