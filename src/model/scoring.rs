//! Insect dislike score: the sum of the eleven Likert items.

use crate::survey::ITEM_COUNT;

/// How a respondent with unanswered items is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Sum whatever items are present; a row with no answers scores 0
    #[default]
    SkipMissing,
    /// Leave the score missing unless all items are answered
    RequireComplete,
}

/// Coerce an item cell to a number. Blank, non-numeric and non-finite text
/// is treated as missing.
pub fn parse_item(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Dislike score for one respondent
pub fn dislike_score(items: &[Option<f64>; ITEM_COUNT], policy: ScorePolicy) -> Option<f64> {
    match policy {
        ScorePolicy::SkipMissing => Some(items.iter().flatten().sum()),
        ScorePolicy::RequireComplete => items
            .iter()
            .copied()
            .collect::<Option<Vec<f64>>>()
            .map(|values| values.iter().sum()),
    }
}
