use std::collections::BTreeMap;

use super::aggregate::{weighted_grades, Contribution};
use super::cie::{calculate_cie, MarkEntry};
use super::grade::{calculate_final_grade, combined_total, grade_letter};
use crate::curriculum::{MarkField, Mode, Subject};

#[derive(Debug, Clone, PartialEq)]
pub struct FinalGrade {
    pub grade_point: u8,
    pub see: f64,
    pub total: f64, // (CIE + SEE) / 2
}

impl FinalGrade {
    pub fn letter(&self) -> &'static str {
        grade_letter(self.grade_point)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectResult {
    pub subject_id: &'static str,
    pub cie_total: u32,
    /// Present in final-grade mode only
    pub grade: Option<FinalGrade>,
}

/// Evaluate one subject's marks for the given mode.
///
/// Final-CGPA mode works on grade selections rather than marks, so it is
/// evaluated like CIE finalisation.
pub fn evaluate_subject(subject: &Subject, entry: &MarkEntry, mode: Mode) -> SubjectResult {
    let cie_total = calculate_cie(subject.kind, entry);

    let grade = match mode {
        Mode::FinalGrade => {
            let see = entry.get(&MarkField::See).copied().unwrap_or(0.0);
            Some(FinalGrade {
                grade_point: calculate_final_grade(cie_total, see),
                see,
                total: combined_total(cie_total, see),
            })
        }
        Mode::CieFinal | Mode::FinalCgpa => None,
    };

    SubjectResult {
        subject_id: subject.id,
        cie_total,
        grade,
    }
}

/// Credit-weighted grade points over evaluated subjects.
///
/// Results without a final grade are skipped.
pub fn results_contribution(subjects: &[Subject], results: &[SubjectResult]) -> Contribution {
    let grades: BTreeMap<String, u8> = results
        .iter()
        .filter_map(|r| r.grade.as_ref().map(|g| (r.subject_id.to_string(), g.grade_point)))
        .collect();
    weighted_grades(subjects, &grades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{find_subject, subjects, Cycle};
    use MarkField::*;

    fn math_entry() -> MarkEntry {
        [
            (Quiz1, 8.0),
            (Quiz2, 9.0),
            (Test1, 40.0),
            (Test2, 35.0),
            (Matlab, 15.0),
            (El, 18.0),
            (See, 70.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_cie_mode_has_no_grade() {
        let math = find_subject(Cycle::Physics, "math").unwrap();
        let result = evaluate_subject(math, &math_entry(), Mode::CieFinal);
        assert_eq!(result.cie_total, 80);
        assert!(result.grade.is_none());
    }

    #[test]
    fn test_final_grade_mode() {
        let math = find_subject(Cycle::Physics, "math").unwrap();
        let result = evaluate_subject(math, &math_entry(), Mode::FinalGrade);
        let grade = result.grade.unwrap();
        assert_eq!(grade.grade_point, 8);
        assert_eq!(grade.letter(), "A");
        assert_eq!(grade.see, 70.0);
        assert_eq!(grade.total, 75.0);
    }

    #[test]
    fn test_final_grade_missing_see_fails() {
        let math = find_subject(Cycle::Physics, "math").unwrap();
        let mut entry = math_entry();
        entry.remove(&See);
        let result = evaluate_subject(math, &entry, Mode::FinalGrade);
        assert_eq!(result.grade.unwrap().grade_point, 0);
    }

    #[test]
    fn test_results_contribution() {
        let cycle_subjects = subjects(Cycle::Physics);
        let math = find_subject(Cycle::Physics, "math").unwrap();
        let core = find_subject(Cycle::Physics, "core").unwrap();

        let core_entry: MarkEntry = [
            (Quiz1, 10.0),
            (Quiz2, 10.0),
            (Test1, 50.0),
            (Test2, 50.0),
            (El, 40.0),
            (See, 100.0),
        ]
        .into_iter()
        .collect();

        let results = vec![
            evaluate_subject(math, &math_entry(), Mode::FinalGrade),
            evaluate_subject(core, &core_entry, Mode::FinalGrade),
        ];
        // math 4cr @ 8 + core 3cr @ 10 = 62 / 7
        let c = results_contribution(cycle_subjects, &results);
        assert_eq!(c.credits, 7);
        assert_eq!(c.weighted_points, 62.0);
        assert_eq!(c.formatted(), "8.86");
    }
}
