use std::collections::BTreeMap;

use crate::curriculum::{Cycle, MarkField, Mode, Subject};
use crate::scoring::{
    evaluate_subject, validate_grade, validate_mark, validate_sgpa, CycleSelection, MarkEntry,
    MarkError, SubjectResult,
};
use crate::storage::{Bucket, KeyValueStore, Persistence};

/// In-progress calculator state, owned by the caller.
///
/// Each field maps to one persisted bucket and is restored independently,
/// so a corrupt bucket only resets its own section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftState {
    /// Mark entries keyed by subject id
    pub form_data: BTreeMap<String, MarkEntry>,
    /// Directly entered SGPA; a cycle present here uses the override
    pub sgpa_overrides: BTreeMap<Cycle, f64>,
    /// Grade points chosen for the final CGPA, keyed by subject id
    pub gpa_grades: BTreeMap<Cycle, BTreeMap<String, u8>>,
    pub mode: Option<Mode>,
    pub cycle: Option<Cycle>,
}

impl DraftState {
    pub fn restore<S: KeyValueStore>(persistence: &Persistence<S>) -> Self {
        Self {
            form_data: persistence.load(Bucket::FormData, BTreeMap::new()),
            sgpa_overrides: persistence.load(Bucket::SgpaValues, BTreeMap::new()),
            gpa_grades: persistence.load(Bucket::FinalCgpaGrades, BTreeMap::new()),
            mode: persistence.load(Bucket::CurrentMode, None),
            cycle: persistence.load(Bucket::CurrentCycle, None),
        }
    }

    /// Save every bucket. Returns false if any write failed.
    pub fn persist<S: KeyValueStore>(&self, persistence: &mut Persistence<S>) -> bool {
        // Non-short-circuiting so every bucket gets a write attempt
        persistence.save(Bucket::FormData, &self.form_data)
            & persistence.save(Bucket::SgpaValues, &self.sgpa_overrides)
            & persistence.save(Bucket::FinalCgpaGrades, &self.gpa_grades)
            & persistence.save(Bucket::CurrentMode, &self.mode)
            & persistence.save(Bucket::CurrentCycle, &self.cycle)
    }

    /// Marks entered for a subject; empty if none
    pub fn entry(&self, subject_id: &str) -> MarkEntry {
        self.form_data.get(subject_id).cloned().unwrap_or_default()
    }

    /// Validate and store one mark. Empty input clears the field.
    ///
    /// A rejected edit leaves the previous value in place.
    pub fn set_mark(
        &mut self,
        subject: &Subject,
        field: MarkField,
        raw: &str,
    ) -> Result<Option<f64>, MarkError> {
        let value = validate_mark(subject.kind, field, raw)?;

        let entry = self.form_data.entry(subject.id.to_string()).or_default();
        match value {
            Some(v) => {
                entry.insert(field, v);
            }
            None => {
                entry.remove(&field);
            }
        }
        if entry.is_empty() {
            self.form_data.remove(subject.id);
        }

        Ok(value)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = Some(mode);
    }

    pub fn set_cycle(&mut self, cycle: Cycle) {
        self.cycle = Some(cycle);
    }

    pub fn evaluate(&self, subject: &Subject, mode: Mode) -> SubjectResult {
        evaluate_subject(subject, &self.entry(subject.id), mode)
    }

    /// Select a final-CGPA grade for a subject.
    ///
    /// Picking a per-subject grade switches the cycle back from an SGPA
    /// override to per-subject grades.
    pub fn set_gpa_grade(
        &mut self,
        cycle: Cycle,
        subject: &Subject,
        raw: &str,
    ) -> Result<u8, MarkError> {
        let grade = validate_grade(raw)?;
        self.sgpa_overrides.remove(&cycle);
        self.gpa_grades
            .entry(cycle)
            .or_default()
            .insert(subject.id.to_string(), grade);
        Ok(grade)
    }

    /// Returns true if a grade was selected before.
    pub fn clear_gpa_grade(&mut self, cycle: Cycle, subject_id: &str) -> bool {
        let Some(grades) = self.gpa_grades.get_mut(&cycle) else {
            return false;
        };
        let removed = grades.remove(subject_id).is_some();
        if grades.is_empty() {
            self.gpa_grades.remove(&cycle);
        }
        removed
    }

    /// Enter an SGPA directly for a cycle. Empty input disables the override.
    ///
    /// Enabling an override discards the cycle's per-subject grades.
    pub fn set_sgpa_override(&mut self, cycle: Cycle, raw: &str) -> Result<Option<f64>, MarkError> {
        let value = validate_sgpa(raw)?;
        match value {
            Some(sgpa) => {
                self.sgpa_overrides.insert(cycle, sgpa);
                self.gpa_grades.remove(&cycle);
            }
            None => {
                self.clear_sgpa_override(cycle);
            }
        }
        Ok(value)
    }

    /// Returns true if the cycle had an override.
    pub fn clear_sgpa_override(&mut self, cycle: Cycle) -> bool {
        self.sgpa_overrides.remove(&cycle).is_some()
    }

    pub fn cycle_selection(&self, cycle: Cycle) -> CycleSelection {
        match self.sgpa_overrides.get(&cycle) {
            Some(sgpa) => CycleSelection::Override(*sgpa),
            None => {
                CycleSelection::Grades(self.gpa_grades.get(&cycle).cloned().unwrap_or_default())
            }
        }
    }

    /// Forget everything, in memory and in the store.
    pub fn reset_all<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>) {
        *self = Self::default();
        persistence.clear(&Bucket::ALL);
    }

    /// Forget entered marks only.
    pub fn reset_marks<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>) {
        self.form_data.clear();
        persistence.clear(&[Bucket::FormData]);
    }

    /// Forget final-CGPA grade selections and SGPA overrides.
    pub fn reset_gpa<S: KeyValueStore>(&mut self, persistence: &mut Persistence<S>) {
        self.gpa_grades.clear();
        self.sgpa_overrides.clear();
        persistence.clear(&[Bucket::FinalCgpaGrades, Bucket::SgpaValues]);
    }
}
