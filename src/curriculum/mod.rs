pub mod catalog;
pub mod types;

pub use catalog::{find_subject, gpa_subjects, subjects};
pub use types::{Cycle, MarkField, Mode, Subject, SubjectKind};
