use std::collections::BTreeMap;

use crate::curriculum::{MarkField, SubjectKind};

/// Raw component marks for one subject, keyed by field.
pub type MarkEntry = BTreeMap<MarkField, f64>;

fn mark(entry: &MarkEntry, field: MarkField) -> f64 {
    entry.get(&field).copied().unwrap_or(0.0)
}

/// Unrounded weighted CIE sum. Absent fields count as 0.
pub fn cie_raw(kind: SubjectKind, entry: &MarkEntry) -> f64 {
    let quizzes = mark(entry, MarkField::Quiz1) + mark(entry, MarkField::Quiz2);
    let tests = mark(entry, MarkField::Test1) + mark(entry, MarkField::Test2);
    let el = mark(entry, MarkField::El);

    // Tests are scaled as tests * weight / 100 rather than tests / 100 * weight
    // so that whole-number inputs stay exact before the ceiling.
    match kind {
        SubjectKind::Math => quizzes + tests * 40.0 / 100.0 + mark(entry, MarkField::Matlab) + el,
        SubjectKind::Lab => quizzes / 2.0 + tests * 30.0 / 100.0 + mark(entry, MarkField::Lab) + el,
        SubjectKind::Regular => quizzes + tests * 40.0 / 100.0 + el,
    }
}

/// CIE total, rounded up to the next whole mark.
pub fn calculate_cie(kind: SubjectKind, entry: &MarkEntry) -> u32 {
    // Float-to-int casts saturate, so an out-of-contract negative sum reads as 0.
    cie_raw(kind, entry).ceil() as u32
}
