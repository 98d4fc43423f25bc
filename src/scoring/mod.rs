pub mod aggregate;
pub mod cie;
pub mod engine;
pub mod grade;
pub mod see;
pub mod validation;

pub use aggregate::{
    calculate_cgpa, calculate_sgpa, cycle_contribution, format_gpa, weighted_grades, Contribution,
    CycleSelection, DEFAULT_OVERRIDE_CREDITS, MAX_OVERRIDE_CREDITS,
};
pub use cie::{calculate_cie, MarkEntry};
pub use engine::{evaluate_subject, results_contribution, FinalGrade, SubjectResult};
pub use grade::{calculate_final_grade, grade_letter, parse_grade, GRADE_POINTS, MIN_PASS_CIE};
pub use see::{see_requirements, SeeRequirement, SeeRequirements};
pub use validation::{validate_grade, validate_mark, validate_sgpa, MarkError};
