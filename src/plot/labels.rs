use super::font::Locale;
use crate::model::{Factor, Frequency, Gender, ResidenceArea};

pub fn score_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Insect Dislike Score",
        Locale::Japanese => "虫嫌いスコア",
    }
}

/// Short name of the score in the correlation matrix
pub fn score_short_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Insect Dislike",
        Locale::Japanese => "虫嫌い",
    }
}

/// x-axis description of a factor's box plot
pub fn factor_axis_label(factor: Factor, locale: Locale) -> &'static str {
    match (locale, factor) {
        (Locale::English, Factor::NatureContact) => "Outdoor Play Frequency in Childhood",
        (Locale::English, Factor::ReadingHabit) => "Reading Frequency",
        (Locale::English, Factor::InsectBookReading) => "Insect-Related Book Reading Frequency",
        (Locale::English, Factor::Gender) => "Gender",
        (Locale::English, Factor::ResidenceArea) => "Residence Area Type",
        (Locale::Japanese, Factor::NatureContact) => "幼少期に自然の中で遊んだ頻度",
        (Locale::Japanese, Factor::ReadingHabit) => "読書頻度",
        (Locale::Japanese, Factor::InsectBookReading) => "虫に関する本の読書頻度",
        (Locale::Japanese, Factor::Gender) => "性別",
        (Locale::Japanese, Factor::ResidenceArea) => "居住地域の種類",
    }
}

/// Name of a factor in the heatmap and the coefficient chart
pub fn factor_short_label(factor: Factor, locale: Locale) -> &'static str {
    match locale {
        Locale::English => factor.english(),
        Locale::Japanese => match factor {
            Factor::NatureContact => "自然接触",
            Factor::ReadingHabit => "読書習慣",
            Factor::InsectBookReading => "虫本読書",
            Factor::Gender => "性別(女性=1)",
            Factor::ResidenceArea => "都市化度",
        },
    }
}

/// Category names of a factor in plot order
pub fn category_labels(factor: Factor, locale: Locale) -> Vec<&'static str> {
    let pick = |english: &'static str, japanese: &'static str| match locale {
        Locale::English => english,
        Locale::Japanese => japanese,
    };

    match factor {
        Factor::NatureContact | Factor::ReadingHabit | Factor::InsectBookReading => Frequency::ALL
            .iter()
            .map(|f| pick(f.english(), f.japanese()))
            .collect(),
        Factor::Gender => Gender::ALL
            .iter()
            .map(|g| pick(g.english(), g.japanese()))
            .collect(),
        Factor::ResidenceArea => ResidenceArea::ALL
            .iter()
            .map(|a| pick(a.english(), a.japanese()))
            .collect(),
    }
}

pub fn colorbar_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Spearman Correlation",
        Locale::Japanese => "スピアマン相関係数",
    }
}

pub fn coefficient_axis_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Coefficient (negative = reduces insect dislike)",
        Locale::Japanese => "標準化偏回帰係数（負 = 虫嫌いを減らす）",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        assert_eq!(
            category_labels(Factor::ReadingHabit, Locale::English),
            vec!["Frequently", "Occasionally", "Rarely"]
        );
        assert_eq!(category_labels(Factor::Gender, Locale::Japanese), vec!["男性", "女性"]);
        assert_eq!(
            category_labels(Factor::ResidenceArea, Locale::English),
            vec!["Rural", "Regional City", "Suburban", "Urban"]
        );
    }

    #[test]
    fn test_short_labels() {
        assert_eq!(factor_short_label(Factor::ResidenceArea, Locale::English), "Urban Residence");
        assert_eq!(factor_short_label(Factor::Gender, Locale::Japanese), "性別(女性=1)");
        assert_eq!(score_short_label(Locale::English), "Insect Dislike");
    }
}
