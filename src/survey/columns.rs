//! Column normalization: maps the Japanese question headers onto short
//! field names and resolves the columns the analysis needs.

use crate::error::{Result, SurveyError};
use regex::Regex;
use std::collections::HashMap;

/// Number of Likert items that make up the dislike score
pub const ITEM_COUNT: usize = 11;

pub const GENDER: &str = "Gender";
pub const RESIDENCE_AREA: &str = "Residence_Area";
pub const NATURE_CONTACT: &str = "Nature_Contact";
pub const READING_HABIT: &str = "Reading_Habit";
pub const INSECT_BOOK_READING: &str = "Insect_Book_Reading";

/// Known question headers and the field names they are renamed to
pub const KNOWN_HEADERS: [(&str, &str); 5] = [
    ("性別を選択してください。", GENDER),
    (
        "幼少期に最も長く住んでいた居住地域の種類を選択してください。",
        RESIDENCE_AREA,
    ),
    (
        "幼少期、屋外で遊ぶ際、よく山や川、海、田んぼなど、自然に近接した空間で遊んでいましたか？",
        NATURE_CONTACT,
    ),
    ("幼少期によく本を読んでいましたか？", READING_HABIT),
    (
        "幼少期によく虫に関する本（図鑑等も含む）を読んでいましたか？",
        INSECT_BOOK_READING,
    ),
];

lazy_static::lazy_static! {
    // "12. 質問文" -> Q12
    static ref NUMBERED_ITEM: Regex = Regex::new(r"^(\d+)\.").unwrap();
}

/// Name of the n-th (1-based) item column
pub fn item_name(n: usize) -> String {
    format!("Q{}", n)
}

/// Short name for a raw header, or `None` when the header is kept as is.
///
/// A numbered header (`<digits>.`) always becomes `Q<digits>`, even if it is
/// also one of the known headers.
pub fn rename_header(header: &str) -> Option<String> {
    let header = header.trim();

    if let Some(caps) = NUMBERED_ITEM.captures(header) {
        return Some(format!("Q{}", &caps[1]));
    }

    KNOWN_HEADERS
        .iter()
        .find(|(raw, _)| *raw == header)
        .map(|(_, name)| name.to_string())
}

/// Resolved positions of every column used by the analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyColumns {
    /// Header list after renaming, in file order
    pub names: Vec<String>,
    pub gender: usize,
    pub residence_area: usize,
    pub nature_contact: usize,
    pub reading_habit: usize,
    pub insect_book_reading: usize,
    pub items: [usize; ITEM_COUNT],
}

impl SurveyColumns {
    /// Rename the raw headers and validate that every required column is
    /// present exactly once.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| rename_header(h).unwrap_or_else(|| h.clone()))
            .collect();

        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, name) in names.iter().enumerate() {
            positions.entry(name.as_str()).or_default().push(idx);
        }

        let find = |name: &str| -> Result<usize> {
            match positions.get(name).map(|v| v.as_slice()) {
                Some([idx]) => Ok(*idx),
                Some([]) | None => Err(SurveyError::MissingColumn(name.to_string())),
                Some(_) => Err(SurveyError::DuplicateColumn(name.to_string())),
            }
        };

        let mut items = [0usize; ITEM_COUNT];
        for (i, slot) in items.iter_mut().enumerate() {
            *slot = find(&item_name(i + 1))?;
        }

        let columns = SurveyColumns {
            gender: find(GENDER)?,
            residence_area: find(RESIDENCE_AREA)?,
            nature_contact: find(NATURE_CONTACT)?,
            reading_habit: find(READING_HABIT)?,
            insect_book_reading: find(INSECT_BOOK_READING)?,
            items,
            names,
        };

        log::debug!("Resolved survey columns: {:?}", columns.names);
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_headers() -> Vec<String> {
        let mut headers: Vec<String> = vec!["タイムスタンプ".to_string()];
        headers.extend(KNOWN_HEADERS.iter().map(|(raw, _)| raw.to_string()));
        for n in 1..=ITEM_COUNT {
            headers.push(format!("{}. 虫についての質問{}", n, n));
        }
        headers
    }

    #[test]
    fn test_rename_numbered_header() {
        assert_eq!(rename_header("3. 虫を見ると不快になる"), Some("Q3".to_string()));
        assert_eq!(rename_header("11.虫が嫌い"), Some("Q11".to_string()));
        assert_eq!(rename_header("  7. 前後に空白"), Some("Q7".to_string()));
    }

    #[test]
    fn test_digits_are_kept_verbatim() {
        assert_eq!(rename_header("01. 先頭ゼロ"), Some("Q01".to_string()));
    }

    #[test]
    fn test_number_must_lead() {
        assert_eq!(rename_header("質問 3. 途中"), None);
        assert_eq!(rename_header("3 ピリオドなし"), None);
    }

    #[test]
    fn test_rename_known_header() {
        assert_eq!(
            rename_header("性別を選択してください。"),
            Some(GENDER.to_string())
        );
        assert_eq!(rename_header("タイムスタンプ"), None);
    }

    #[test]
    fn test_resolve_columns() {
        let headers = sample_headers();
        let cols = SurveyColumns::resolve(&headers).unwrap();
        assert_eq!(cols.gender, 1);
        assert_eq!(cols.residence_area, 2);
        assert_eq!(cols.nature_contact, 3);
        assert_eq!(cols.reading_habit, 4);
        assert_eq!(cols.insect_book_reading, 5);
        assert_eq!(cols.items[0], 6);
        assert_eq!(cols.items[10], 16);
        assert_eq!(cols.names[6], "Q1");
        assert_eq!(cols.names[0], "タイムスタンプ");
    }

    #[test]
    fn test_extra_items_are_ignored() {
        let mut headers = sample_headers();
        headers.push("12. 追加の質問".to_string());
        let cols = SurveyColumns::resolve(&headers).unwrap();
        assert_eq!(cols.names.last().map(String::as_str), Some("Q12"));
    }

    #[test]
    fn test_missing_item_column() {
        let headers: Vec<String> = sample_headers()
            .into_iter()
            .filter(|h| !h.starts_with("7."))
            .collect();
        let err = SurveyColumns::resolve(&headers).unwrap_err();
        assert!(matches!(err, SurveyError::MissingColumn(ref name) if name == "Q7"));
    }

    #[test]
    fn test_duplicate_item_column() {
        let mut headers = sample_headers();
        headers.push("2. 同じ番号".to_string());
        let err = SurveyColumns::resolve(&headers).unwrap_err();
        assert!(matches!(err, SurveyError::DuplicateColumn(ref name) if name == "Q2"));
    }
}
