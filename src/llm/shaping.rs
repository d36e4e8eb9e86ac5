//! Post-processing that turns a raw completion into a short chat reply
//!
//! Small models tend to keep talking after answering: they start a new
//! paragraph, invent the next `User:` turn, or pose themselves a
//! `Question:`. The reply is cut at the first of those and capped at three
//! sentences.

/// Markers that end the usable part of a reply, applied in order
const CUT_MARKERS: [&str; 3] = ["\n\n", "User:", "Question:"];

/// Maximum number of sentence fragments kept
const MAX_SENTENCES: usize = 3;

/// Shape a raw generated reply.
///
/// Pure and deterministic: the same input always yields the same output.
pub fn shape_response(raw: &str) -> String {
    let mut text = raw;
    for marker in CUT_MARKERS {
        text = truncate_at(text, marker);
    }

    let fragments: Vec<&str> = text.split('.').collect();
    if fragments.len() > MAX_SENTENCES {
        let kept: Vec<&str> = fragments[..MAX_SENTENCES]
            .iter()
            .map(|fragment| fragment.trim())
            .collect();
        return format!("{}.", kept.join(". ")).trim().to_string();
    }

    text.trim().to_string()
}

fn truncate_at<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(index) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuts_at_paragraph_and_user_turn() {
        assert_eq!(shape_response("Hello there.\n\nUser: what?"), "Hello there.");
    }

    #[test]
    fn test_caps_at_three_sentences() {
        assert_eq!(shape_response("One. Two. Three. Four."), "One. Two. Three.");
    }

    #[test]
    fn test_three_sentences_with_trailing_period_are_rejoined() {
        // "One. Two. Three." splits into four fragments (the last is empty)
        assert_eq!(shape_response("One. Two. Three."), "One. Two. Three.");
    }

    #[test]
    fn test_cuts_before_question_marker() {
        assert_eq!(
            shape_response("Paris is the capital Question: why"),
            "Paris is the capital"
        );
    }

    #[test]
    fn test_cuts_at_inline_user_marker() {
        assert_eq!(shape_response("Sure thing User: and then"), "Sure thing");
    }

    #[test]
    fn test_two_sentences_untouched() {
        assert_eq!(shape_response("  It is 4. Really.  "), "It is 4. Really.");
    }

    #[test]
    fn test_sentences_without_spaces() {
        assert_eq!(shape_response("a.b.c.d"), "a. b. c.");
    }

    #[test]
    fn test_marker_at_start_yields_empty() {
        assert_eq!(shape_response("User: hi"), "");
        assert_eq!(shape_response(""), "");
    }

    #[test]
    fn test_markers_apply_in_order() {
        // Question: survives the paragraph cut only if it precedes it
        assert_eq!(shape_response("A\n\nQuestion: b"), "A");
        assert_eq!(shape_response("A Question: b\n\nC"), "A");
    }
}
