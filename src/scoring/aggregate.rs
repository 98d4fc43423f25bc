use std::collections::BTreeMap;

use crate::curriculum::Subject;

/// Credit weight of a cycle whose SGPA was entered directly.
pub const DEFAULT_OVERRIDE_CREDITS: u32 = 20;

/// Largest accepted override credit weight.
pub const MAX_OVERRIDE_CREDITS: u32 = 100;

/// How a cycle contributes to SGPA/CGPA.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleSelection {
    /// SGPA entered directly, standing in for every subject of the cycle
    Override(f64),
    /// Grade point per subject id; subjects without a grade are skipped
    Grades(BTreeMap<String, u8>),
}

/// Weighted grade points and the credits behind them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Contribution {
    pub weighted_points: f64,
    pub credits: u64,
}

impl Contribution {
    pub fn add(&mut self, other: Contribution) {
        self.weighted_points += other.weighted_points;
        self.credits = self.credits.saturating_add(other.credits);
    }

    /// Credit-weighted average, or None when no credits contributed.
    pub fn average(&self) -> Option<f64> {
        (self.credits > 0).then(|| self.weighted_points / self.credits as f64)
    }

    /// Average as a two-decimal string, "0.00" when empty.
    pub fn formatted(&self) -> String {
        format_gpa(self.average().unwrap_or(0.0))
    }
}

/// Sum grade point * credits over subjects that have a grade.
pub fn weighted_grades(subjects: &[Subject], grades: &BTreeMap<String, u8>) -> Contribution {
    subjects
        .iter()
        .filter_map(|s| grades.get(s.id).map(|gp| (s, *gp)))
        .fold(Contribution::default(), |mut acc, (subject, gp)| {
            acc.add(Contribution {
                weighted_points: gp as f64 * subject.credits as f64,
                credits: u64::from(subject.credits),
            });
            acc
        })
}

/// What one cycle adds to the CGPA.
pub fn cycle_contribution(
    subjects: &[Subject],
    selection: &CycleSelection,
    override_credits: u32,
) -> Contribution {
    match selection {
        CycleSelection::Override(sgpa) => Contribution {
            weighted_points: sgpa * override_credits as f64,
            credits: u64::from(override_credits),
        },
        CycleSelection::Grades(grades) => weighted_grades(subjects, grades),
    }
}

/// SGPA of one cycle as a two-decimal string.
pub fn calculate_sgpa(subjects: &[Subject], selection: &CycleSelection) -> String {
    match selection {
        CycleSelection::Override(sgpa) => format_gpa(*sgpa),
        CycleSelection::Grades(grades) => weighted_grades(subjects, grades).formatted(),
    }
}

/// CGPA across cycles as a two-decimal string, "0.00" if nothing was entered.
pub fn calculate_cgpa<'a, I>(cycles: I, override_credits: u32) -> String
where
    I: IntoIterator<Item = (&'a [Subject], &'a CycleSelection)>,
{
    let mut total = Contribution::default();
    for (subjects, selection) in cycles {
        total.add(cycle_contribution(subjects, selection, override_credits));
    }
    total.formatted()
}

/// Format a GPA to two decimals, rounding halves away from zero.
pub fn format_gpa(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}
