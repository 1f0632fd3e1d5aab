use super::encoding::{Frequency, Gender, ResidenceArea};
use super::factor::Factor;
use super::scoring::{dislike_score, parse_item, ScorePolicy};
use crate::survey::{RawTable, SurveyColumns, ITEM_COUNT};
use std::collections::BTreeMap;

/// One respondent after column renaming and scoring
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub gender: Option<String>,
    pub residence_area: Option<String>,
    pub nature_contact: Option<String>,
    pub reading_habit: Option<String>,
    pub insect_book_reading: Option<String>,
    pub items: [Option<f64>; ITEM_COUNT],
    pub dislike_score: Option<f64>,
}

/// One respondent with every categorical answer mapped onto its scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodedRecord {
    pub dislike_score: Option<f64>,
    pub nature_contact: Option<Frequency>,
    pub reading_habit: Option<Frequency>,
    pub insect_book_reading: Option<Frequency>,
    pub gender: Option<Gender>,
    pub residence_area: Option<ResidenceArea>,
}

impl EncodedRecord {
    /// Numeric code of a factor (the `*_Num` value)
    pub fn factor_value(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::NatureContact => self.nature_contact.map(|f| f.code()),
            Factor::ReadingHabit => self.reading_habit.map(|f| f.code()),
            Factor::InsectBookReading => self.insect_book_reading.map(|f| f.code()),
            Factor::Gender => self.gender.map(|g| g.code()),
            Factor::ResidenceArea => self.residence_area.map(|a| a.code()),
        }
    }
}

/// Answers that were present but matched no known label, by factor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodingReport {
    /// factor -> (label -> occurrences)
    pub unrecognized: BTreeMap<&'static str, BTreeMap<String, usize>>,
}

impl EncodingReport {
    pub fn total(&self) -> usize {
        self.unrecognized
            .values()
            .flat_map(|labels| labels.values())
            .sum()
    }

    fn record(&mut self, factor: Factor, label: &str) {
        *self
            .unrecognized
            .entry(factor.column())
            .or_default()
            .entry(label.to_string())
            .or_insert(0) += 1;
    }
}

fn non_empty(cell: Option<&str>) -> Option<String> {
    cell.filter(|c| !c.trim().is_empty()).map(|c| c.to_string())
}

/// Build cleaned, scored records from the raw table
pub fn clean_records(
    table: &RawTable,
    columns: &SurveyColumns,
    policy: ScorePolicy,
) -> Vec<CleanedRecord> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut items = [None; ITEM_COUNT];
            for (slot, &col) in items.iter_mut().zip(columns.items.iter()) {
                *slot = row.get(col).and_then(parse_item);
            }

            CleanedRecord {
                gender: non_empty(row.get(columns.gender)),
                residence_area: non_empty(row.get(columns.residence_area)),
                nature_contact: non_empty(row.get(columns.nature_contact)),
                reading_habit: non_empty(row.get(columns.reading_habit)),
                insect_book_reading: non_empty(row.get(columns.insect_book_reading)),
                dislike_score: dislike_score(&items, policy),
                items,
            }
        })
        .collect()
}

fn encode_field<T>(
    report: &mut EncodingReport,
    factor: Factor,
    label: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let label = label?;
    let value = parse(label);
    if value.is_none() {
        report.record(factor, label.trim());
    }
    value
}

/// Map categorical answers onto their numeric scales.
///
/// Labels outside a vocabulary become missing; they are counted in the
/// returned report rather than rejected.
pub fn encode_records(records: &[CleanedRecord]) -> (Vec<EncodedRecord>, EncodingReport) {
    let mut report = EncodingReport::default();
    let mut encoded = Vec::with_capacity(records.len());

    for r in records {
        encoded.push(EncodedRecord {
            dislike_score: r.dislike_score,
            nature_contact: encode_field(
                &mut report,
                Factor::NatureContact,
                r.nature_contact.as_deref(),
                Frequency::from_label,
            ),
            reading_habit: encode_field(
                &mut report,
                Factor::ReadingHabit,
                r.reading_habit.as_deref(),
                Frequency::from_label,
            ),
            insect_book_reading: encode_field(
                &mut report,
                Factor::InsectBookReading,
                r.insect_book_reading.as_deref(),
                Frequency::from_label,
            ),
            gender: encode_field(&mut report, Factor::Gender, r.gender.as_deref(), Gender::from_label),
            residence_area: encode_field(
                &mut report,
                Factor::ResidenceArea,
                r.residence_area.as_deref(),
                ResidenceArea::from_label,
            ),
        });
    }

    (encoded, report)
}
