pub const ELLIPSIS: &str = "...";

pub const TITLE_BUDGET: usize = 45;
pub const COMPANY_BUDGET: usize = 30;
pub const LOCATION_BUDGET: usize = 35;
pub const EXTRA_VALUE_BUDGET: usize = 60;
pub const EVENT_DESCRIPTION_BUDGET: usize = 160;

/// Cuts `text` to `budget` characters and appends [`ELLIPSIS`] when it is longer.
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate, ELLIPSIS, TITLE_BUDGET};

    #[test]
    fn short_text_kept_as_is() {
        assert_eq!(truncate("ML Engineer", TITLE_BUDGET), "ML Engineer");
    }

    #[test]
    fn text_at_budget_is_not_cut() {
        let exact = "a".repeat(TITLE_BUDGET);
        assert_eq!(truncate(&exact, TITLE_BUDGET), exact);
    }

    #[test]
    fn long_text_is_cut_and_marked() {
        let long = "b".repeat(TITLE_BUDGET + 10);
        let cut = truncate(&long, TITLE_BUDGET);
        assert!(cut.ends_with(ELLIPSIS));
        assert_eq!(cut.chars().count(), TITLE_BUDGET + ELLIPSIS.len());
    }

    #[test]
    fn truncation_is_idempotent() {
        let long = "Senior Staff Machine Learning Infrastructure Engineer, Platform";
        let once = truncate(long, TITLE_BUDGET);
        assert_eq!(truncate(&once, TITLE_BUDGET), once);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundary() {
        let text = "Zürich Zürich Zürich";
        assert_eq!(truncate(text, 2), "Zü...");
    }
}
